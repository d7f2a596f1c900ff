//! Per-key policy run before the host's default key handling.
//!
//! A [Dispatcher] owns a table from keycode to [Action]. Keycodes in the table are fully handled
//! here; everything else is passed back to the host.

use plk_common::keycodes::us_ascii;

/// Calls this keymap makes back into the host runtime.
pub trait Host {
    fn layer_on(&mut self, layer: u8);
    fn layer_off(&mut self, layer: u8);
    /// Type `c` directly instead of sending its keycode.
    fn send_char(&mut self, c: char);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Enable `layer` while held. Pressing first disables `clears` so the two layers are never on
    /// together.
    Momentary { layer: u8, clears: Option<u8> },
    /// Enable `layer` on press and leave it on.
    Latch { layer: u8 },
    /// Type the character on press.
    Literal(char),
}

/// Table entry for a key that types the character its keycode stands for on a US layout.
///
/// Fails to compile if `code` is not a printable character.
pub const fn literal(code: u16) -> (u16, Action) {
    match us_ascii(code) {
        Some(c) => (code, Action::Literal(c)),
        None => panic!("keycode has no literal character"),
    }
}

/// Sort a dispatch table by keycode at compile time.
pub const fn action_table<const N: usize>(mut entries: [(u16, Action); N]) -> [(u16, Action); N] {
    let mut i = 1;
    while i < N {
        let mut j = i;
        while j > 0 && entries[j - 1].0 > entries[j].0 {
            let t = entries[j - 1];
            entries[j - 1] = entries[j];
            entries[j] = t;
            j -= 1;
        }
        i += 1;
    }
    entries
}

#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    table: &'static [(u16, Action)],
}

impl Dispatcher {
    /// `table` must be sorted by keycode; build it with [action_table].
    pub const fn new(table: &'static [(u16, Action)]) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static [(u16, Action)] {
        self.table
    }

    pub fn action(&self, keycode: u16) -> Option<Action> {
        self.table
            .binary_search_by_key(&keycode, |(code, _)| *code)
            .ok()
            .map(|i| self.table[i].1)
    }

    /// Run the action for `keycode`. Returns `true` if the host should carry on with its default
    /// handling of the key, `false` if the key has been fully handled.
    pub fn process(&self, keycode: u16, pressed: bool, host: &mut impl Host) -> bool {
        let Some(action) = self.action(keycode) else {
            return true;
        };
        crate::debug!("action {:?} pressed {}", action, pressed);
        match action {
            Action::Momentary { layer, clears } => {
                if pressed {
                    if let Some(clears) = clears {
                        host.layer_off(clears);
                    }
                    host.layer_on(layer);
                } else {
                    host.layer_off(layer);
                }
            }
            Action::Latch { layer } => {
                if pressed {
                    host.layer_on(layer);
                }
            }
            Action::Literal(c) => {
                if pressed {
                    host.send_char(c);
                }
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod test;
