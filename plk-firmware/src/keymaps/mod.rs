//! The keymaps this crate ships, plus the pieces they share: the Planck layer ids, the custom
//! layer keys and the symbol overrides.

use plk_common::keycodes::{kc, user};

use crate::{
    dispatch::{action_table, literal, Action, Dispatcher},
    keymap::Keymap,
    tap_dance::LayerDance,
};

pub mod otownend;
pub mod owetow;

/// QMK's `_______`: fall through to the next enabled layer.
pub const _______: u16 = kc::TRNS;
/// QMK's `XXXXXXX`: does nothing.
pub const XXXXXXX: u16 = kc::NO;

/// Everything needed to run one keymap.
#[derive(Debug)]
pub struct KeymapDef<const ROWS: usize, const COLS: usize, const LAYERS: usize> {
    pub name: &'static str,
    pub layer_names: [&'static str; LAYERS],
    /// Names of the user keycodes the keymap defines.
    pub custom_keycodes: &'static [(&'static str, u16)],
    pub keymap: Keymap<ROWS, COLS, LAYERS>,
    /// Dispatch table; sorted by keycode.
    pub actions: &'static [(u16, Action)],
    /// Tap-dance slot `n` is keycode `td(n)`.
    pub tap_dances: &'static [LayerDance],
}

impl<const ROWS: usize, const COLS: usize, const LAYERS: usize> KeymapDef<ROWS, COLS, LAYERS> {
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.actions)
    }

    pub fn layer_name(&self, layer: u8) -> Option<&'static str> {
        self.layer_names.get(layer as usize).copied()
    }

    /// Look up a layer by name, ignoring case.
    pub fn layer_id(&self, name: &str) -> Option<u8> {
        self.layer_names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| i as u8)
    }

    pub fn custom_keycode_name(&self, code: u16) -> Option<&'static str> {
        self.custom_keycodes
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(n, _)| *n)
    }

    pub fn custom_keycode(&self, name: &str) -> Option<u16> {
        self.custom_keycodes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }
}

pub const PLANCK_ROWS: usize = 4;
pub const PLANCK_COLS: usize = 12;
pub const PLANCK_LAYERS: usize = 5;

pub type PlanckKeymap = KeymapDef<PLANCK_ROWS, PLANCK_COLS, PLANCK_LAYERS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PlanckLayer {
    Qwerty = 0,
    Symb = 1,
    Move = 2,
    Func = 3,
    Mouse = 4,
}

impl PlanckLayer {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

pub const PLANCK_LAYER_NAMES: [&str; PLANCK_LAYERS] = ["QWERTY", "SYMB", "MOVE", "FUNC", "MOUSE"];

/// Custom keycodes, allocated from the start of the user range.
pub mod custom {
    use super::user;

    /// Reserved; nothing handles it.
    pub const QWERTY: u16 = user(0);
    pub const SYMB: u16 = user(1);
    pub const MOVE: u16 = user(2);
    pub const FUNC: u16 = user(3);
    pub const MOUSE: u16 = user(4);
}

pub static PLANCK_CUSTOM_KEYCODES: [(&str, u16); 5] = [
    ("QWERTY", custom::QWERTY),
    ("SYMB", custom::SYMB),
    ("MOVE", custom::MOVE),
    ("FUNC", custom::FUNC),
    ("MOUSE", custom::MOUSE),
];

const fn layer_key(layer: PlanckLayer) -> Action {
    Action::Momentary {
        layer: layer.id(),
        clears: Some(PlanckLayer::Mouse.id()),
    }
}

/// Layer keys plus the shifted symbols that are typed as literal characters instead of as
/// shift + key.
pub static PLANCK_ACTIONS: [(u16, Action); 24] = action_table([
    (custom::SYMB, layer_key(PlanckLayer::Symb)),
    (custom::MOVE, layer_key(PlanckLayer::Move)),
    (custom::FUNC, layer_key(PlanckLayer::Func)),
    (
        custom::MOUSE,
        Action::Latch {
            layer: PlanckLayer::Mouse.id(),
        },
    ),
    literal(kc::EXLM),
    literal(kc::AT),
    literal(kc::HASH),
    literal(kc::DLR),
    literal(kc::PERC),
    literal(kc::CIRC),
    literal(kc::AMPR),
    literal(kc::ASTR),
    literal(kc::LPRN),
    literal(kc::RPRN),
    literal(kc::TILD),
    literal(kc::GRV),
    literal(kc::PLUS),
    literal(kc::EQL),
    literal(kc::PIPE),
    literal(kc::BSLS),
    literal(kc::LBRC),
    literal(kc::RBRC),
    literal(kc::LCBR),
    literal(kc::RCBR),
]);

/// Tap-dance slot of the MOVE/MOUSE key.
pub const MOVE_MOUSE: u8 = 0;

pub static PLANCK_TAP_DANCES: [LayerDance; 1] = [LayerDance::new(
    PlanckLayer::Move.id(),
    PlanckLayer::Mouse.id(),
)];

pub static OWETOW: PlanckKeymap = KeymapDef {
    name: "owetow",
    layer_names: PLANCK_LAYER_NAMES,
    custom_keycodes: &PLANCK_CUSTOM_KEYCODES,
    keymap: owetow::KEYMAP,
    actions: &PLANCK_ACTIONS,
    tap_dances: &[],
};

pub static OTOWNEND: PlanckKeymap = KeymapDef {
    name: "otownend",
    layer_names: PLANCK_LAYER_NAMES,
    custom_keycodes: &PLANCK_CUSTOM_KEYCODES,
    keymap: otownend::KEYMAP,
    actions: &PLANCK_ACTIONS,
    tap_dances: &PLANCK_TAP_DANCES,
};

pub static ALL: [&PlanckKeymap; 2] = [&OWETOW, &OTOWNEND];

pub fn find(name: &str) -> Option<&'static PlanckKeymap> {
    ALL.iter().copied().find(|k| k.name == name)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod test;
