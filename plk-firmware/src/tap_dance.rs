//! Tap-dance resolution: the host's gesture engine decides when a gesture is over and calls back
//! with how many taps it saw and whether the key is still held. This module turns that into a
//! [Dance] and the layer changes that go with it.

use heapless::Vec;

use crate::dispatch::Host;

pub const MAX_TAP_DANCES: usize = 16;

/// What the gesture engine reports when a gesture finishes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceState {
    pub count: u8,
    pub pressed: bool,
}

impl TapDanceState {
    pub const fn new(count: u8, pressed: bool) -> Self {
        Self { count, pressed }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dance {
    SingleTap,
    SingleHold,
    DoubleTap,
    DoubleHold,
    /// Any other tap count; has no layer effect.
    #[default]
    Unclassified,
}

impl Dance {
    pub fn classify(state: &TapDanceState) -> Self {
        match (state.count, state.pressed) {
            (1, false) => Self::SingleTap,
            (1, true) => Self::SingleHold,
            (2, false) => Self::DoubleTap,
            (2, true) => Self::DoubleHold,
            _ => Self::Unclassified,
        }
    }

    pub fn is_hold(&self) -> bool {
        matches!(self, Self::SingleHold | Self::DoubleHold)
    }
}

/// One key, two layers: holding gives `hold` for as long as the key is down, a double tap latches
/// `toggle` on and a single tap turns it off again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerDance {
    pub hold: u8,
    pub toggle: u8,
}

impl LayerDance {
    pub const fn new(hold: u8, toggle: u8) -> Self {
        Self { hold, toggle }
    }

    pub fn finished(&self, dance: Dance, host: &mut impl Host) {
        match dance {
            Dance::SingleTap => host.layer_off(self.toggle),
            Dance::DoubleTap => host.layer_on(self.toggle),
            Dance::SingleHold | Dance::DoubleHold => {
                host.layer_off(self.toggle);
                host.layer_on(self.hold);
            }
            Dance::Unclassified => {}
        }
    }

    pub fn reset(&self, dance: Dance, host: &mut impl Host) {
        if dance.is_hold() {
            host.layer_off(self.toggle);
            host.layer_off(self.hold);
        }
    }
}

/// The tap-dance slots of a keymap and the last outcome of each. The host only runs one gesture at
/// a time, so a slot's `reset` always follows its own `finished`.
#[derive(Debug)]
pub struct TapDances {
    dances: &'static [LayerDance],
    outcomes: Vec<Dance, MAX_TAP_DANCES>,
}

impl TapDances {
    pub fn new(dances: &'static [LayerDance]) -> Self {
        let mut outcomes = Vec::new();
        for _ in dances.iter().take(MAX_TAP_DANCES) {
            let _ = outcomes.push(Dance::Unclassified);
        }
        if dances.len() > MAX_TAP_DANCES {
            crate::error!(
                "too many tap dances {}; max is {}",
                dances.len(),
                MAX_TAP_DANCES
            );
        }
        Self { dances, outcomes }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn last(&self, index: u8) -> Option<Dance> {
        self.outcomes.get(index as usize).copied()
    }

    /// Gesture finished: classify it, remember the outcome and apply it.
    pub fn finished(
        &mut self,
        index: u8,
        state: &TapDanceState,
        host: &mut impl Host,
    ) -> Option<Dance> {
        let i = index as usize;
        let (Some(dance), Some(outcome)) = (self.dances.get(i), self.outcomes.get_mut(i)) else {
            crate::warn!("no tap dance in slot {}", index);
            return None;
        };
        let d = Dance::classify(state);
        crate::debug!("tap dance {} finished {:?}", index, d);
        *outcome = d;
        dance.finished(d, host);
        Some(d)
    }

    /// Gesture released: undo whatever the last outcome of this slot holds.
    pub fn reset(&mut self, index: u8, host: &mut impl Host) {
        let i = index as usize;
        let (Some(dance), Some(outcome)) = (self.dances.get(i), self.outcomes.get(i)) else {
            crate::warn!("no tap dance in slot {}", index);
            return;
        };
        dance.reset(*outcome, host);
    }

    pub fn clear(&mut self) {
        for o in self.outcomes.iter_mut() {
            *o = Dance::Unclassified;
        }
    }
}

#[cfg(test)]
#[path = "tap_dance_test.rs"]
mod test;
