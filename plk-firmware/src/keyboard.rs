use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};
use plk_common::keycodes::key_range;

use crate::{
    dispatch::{Dispatcher, Host},
    firmware_functions,
    keymaps::KeymapDef,
    layer::LayerState,
    tap_dance::{TapDanceState, TapDances},
};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanKey {
    row: u8,
    col: u8,
}
impl ScanKey {
    pub fn new(row: u8, col: u8, is_down: bool) -> Self {
        Self {
            row: row | if is_down { 0x80 } else { 0 },
            col,
        }
    }

    pub fn row(&self) -> usize {
        (self.row & 0x7f) as usize
    }

    pub fn column(&self) -> usize {
        self.col as usize
    }

    pub fn is_down(&self) -> bool {
        self.row & 0x80 == 0x80
    }
}

/// Input from the host runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Key(ScanKey),
    /// The gesture engine has classified a tap-dance gesture.
    DanceFinished { index: u8, state: TapDanceState },
    /// The tap-dance key of the last finished gesture was released.
    DanceReset { index: u8 },
    ClearAll,
    Exit,
}

/// Output for the host runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// Default handling for a keycode the keymap did not consume.
    Key(u16, bool),
    /// Type a literal character.
    Char(char),
    /// A tap-dance key changed; feed it to the gesture engine.
    TapDance(u8, bool),
    /// The enabled layers changed.
    Layers(u32),
    /// Pending reports were dropped; release everything.
    Clear,
}

pub struct EventChannel<M: RawMutex, const N: usize>(Channel<M, Event, N>);
impl<M: RawMutex, const N: usize> Default for EventChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}
impl<M: RawMutex, const N: usize> EventChannel<M, N> {
    pub async fn send(&self, event: Event) {
        self.0.send(event).await
    }

    async fn receive(&self) -> Event {
        self.0.receive().await
    }
}

pub struct ReportChannel<M: RawMutex, const N: usize>(Channel<M, Report, N>);
impl<M: RawMutex, const N: usize> Default for ReportChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}
impl<M: RawMutex, const N: usize> ReportChannel<M, N> {
    pub fn try_receive(&self) -> Option<Report> {
        self.0.try_receive().ok()
    }

    fn report(&self, message: Report) {
        if self.0.try_send(message).is_err() {
            crate::warn!("report buffer full");
            self.clear_reports();
            let _ = self.0.try_send(Report::Clear);
        }
    }

    fn clear_reports(&self) {
        self.0.clear();
    }
}

/// The [Host] the dispatcher and tap-dances see: layer changes go to the keyboard's
/// [LayerState], typed characters go out as reports.
struct Output<'a, 'c, M: RawMutex, const N: usize> {
    layers: &'a mut LayerState,
    report_channel: &'c ReportChannel<M, N>,
}
impl<M: RawMutex, const N: usize> Host for Output<'_, '_, M, N> {
    fn layer_on(&mut self, layer: u8) {
        self.layers.on(layer);
    }

    fn layer_off(&mut self, layer: u8) {
        self.layers.off(layer);
    }

    fn send_char(&mut self, c: char) {
        self.report_channel.report(Report::Char(c));
    }
}

pub struct Keyboard<
    'c,
    const ROW_COUNT: usize,
    const COL_COUNT: usize,
    const LAYER_COUNT: usize,
    M: RawMutex,
    const REPORT_BUFFER_SIZE: usize,
> {
    def: &'static KeymapDef<ROW_COUNT, COL_COUNT, LAYER_COUNT>,
    dispatcher: Dispatcher,
    tap_dances: TapDances,
    layers: LayerState,
    active_codes: [[u16; COL_COUNT]; ROW_COUNT],
    report_channel: &'c ReportChannel<M, REPORT_BUFFER_SIZE>,
}
impl<
        'c,
        const ROW_COUNT: usize,
        const COL_COUNT: usize,
        const LAYER_COUNT: usize,
        M: RawMutex,
        const REPORT_BUFFER_SIZE: usize,
    > Keyboard<'c, ROW_COUNT, COL_COUNT, LAYER_COUNT, M, REPORT_BUFFER_SIZE>
{
    pub fn new(
        def: &'static KeymapDef<ROW_COUNT, COL_COUNT, LAYER_COUNT>,
        report_channel: &'c ReportChannel<M, REPORT_BUFFER_SIZE>,
    ) -> Self {
        crate::info!("keymap {}", def.name);
        Self {
            def,
            dispatcher: def.dispatcher(),
            tap_dances: TapDances::new(def.tap_dances),
            layers: LayerState::new(),
            active_codes: [[key_range::NO; COL_COUNT]; ROW_COUNT],
            report_channel,
        }
    }

    pub fn layers(&self) -> LayerState {
        self.layers
    }

    /// Process events until [Event::Exit].
    pub async fn run<const EVENT_BUFFER_SIZE: usize>(
        &mut self,
        event_channel: &EventChannel<M, EVENT_BUFFER_SIZE>,
    ) {
        loop {
            match event_channel.receive().await {
                Event::Exit => return,
                event => self.handle(event),
            }
        }
    }

    pub fn handle(&mut self, event: Event) {
        let before = self.layers;
        match event {
            Event::Key(k) => self.key_switch(k),
            Event::DanceFinished { index, state } => self.dance_finished(index, &state),
            Event::DanceReset { index } => self.dance_reset(index),
            Event::ClearAll => {
                self.clear_all();
                return;
            }
            Event::Exit => {}
        }
        if before != self.layers {
            self.report(Report::Layers(self.layers.bits()));
        }
    }

    /// A key changed. Down resolves the keycode through the enabled layers and remembers it; up
    /// releases whatever that position pressed, even if its layer has since been turned off.
    pub fn key_switch(&mut self, k: ScanKey) {
        let (row, column) = (k.row(), k.column());
        if row >= ROW_COUNT || column >= COL_COUNT {
            crate::warn!("key out of range {},{}", row, column);
            return;
        }
        let code = if k.is_down() {
            let code = self.def.keymap.find_code(&self.layers, row, column);
            self.active_codes[row][column] = code;
            code
        } else {
            core::mem::replace(&mut self.active_codes[row][column], key_range::NO)
        };
        self.process_code(code, k.is_down());
    }

    fn process_code(&mut self, code: u16, pressed: bool) {
        let mut output = Output {
            layers: &mut self.layers,
            report_channel: self.report_channel,
        };
        if self.dispatcher.process(code, pressed, &mut output) {
            self.default_action(code, pressed);
        }
    }

    fn default_action(&mut self, code: u16, pressed: bool) {
        match code {
            key_range::NO | key_range::TRANSPARENT => {}
            key_range::TAP_DANCE_MIN..=key_range::TAP_DANCE_MAX => {
                self.report(Report::TapDance(
                    (code - key_range::TAP_DANCE_MIN) as u8,
                    pressed,
                ));
            }
            key_range::BOOTLOADER => {
                if !pressed {
                    firmware_functions::reset_to_bootloader();
                }
            }
            key_range::USER_MIN..=key_range::USER_MAX => {
                crate::debug!("unhandled user keycode {}", code);
            }
            _ => self.report(Report::Key(code, pressed)),
        }
    }

    fn dance_finished(&mut self, index: u8, state: &TapDanceState) {
        let mut output = Output {
            layers: &mut self.layers,
            report_channel: self.report_channel,
        };
        self.tap_dances.finished(index, state, &mut output);
    }

    fn dance_reset(&mut self, index: u8) {
        let mut output = Output {
            layers: &mut self.layers,
            report_channel: self.report_channel,
        };
        self.tap_dances.reset(index, &mut output);
    }

    /// Back to the boot state: base layer only, nothing held.
    pub fn clear_all(&mut self) {
        for r in self.active_codes.iter_mut() {
            for c in r.iter_mut() {
                *c = key_range::NO;
            }
        }
        self.layers.clear();
        self.tap_dances.clear();
        self.report_channel.clear_reports();
        self.report(Report::Clear);
    }

    fn report(&self, message: Report) {
        self.report_channel.report(message);
    }
}

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod test;
