use heapless::{String, Vec};

use crate::{dispatch::Host, layer::LayerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    LayerOn(u8),
    LayerOff(u8),
    SendChar(char),
}

/// A [Host] that applies layer changes to a [LayerState] and records every call.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub layers: LayerState,
    pub sent: String<64>,
    pub calls: Vec<HostCall, 64>,
}

impl RecordingHost {
    pub fn with_layers(layers: LayerState) -> Self {
        Self {
            layers,
            ..Default::default()
        }
    }

    pub fn take_calls(&mut self) -> Vec<HostCall, 64> {
        self.sent.clear();
        core::mem::take(&mut self.calls)
    }
}

impl Host for RecordingHost {
    fn layer_on(&mut self, layer: u8) {
        self.layers.on(layer);
        self.calls.push(HostCall::LayerOn(layer)).unwrap();
    }

    fn layer_off(&mut self, layer: u8) {
        self.layers.off(layer);
        self.calls.push(HostCall::LayerOff(layer)).unwrap();
    }

    fn send_char(&mut self, c: char) {
        self.sent.push(c).unwrap();
        self.calls.push(HostCall::SendChar(c)).unwrap();
    }
}
