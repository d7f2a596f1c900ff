pub mod key_range {
    pub const NO: u16 = 0x0000;
    pub const TRANSPARENT: u16 = 0x0001;

    pub const BASIC_MIN: u16 = 0x04;
    pub const BASIC_A: u16 = 0x04;
    pub const BASIC_1: u16 = 0x1e;
    pub const BASIC_0: u16 = 0x27;
    pub const BASIC_MAX: u16 = 0xa4;
    pub const SYSTEM_MIN: u16 = 0xa5;
    pub const SYSTEM_MAX: u16 = 0xa7;
    pub const MEDIA_MIN: u16 = 0xa8;
    pub const MEDIA_MAX: u16 = 0xbe;
    pub const MODIFIER_MIN: u16 = 0xe0;
    pub const MODIFIER_MAX: u16 = 0xe7;
    pub const MOUSE_MIN: u16 = 0xf0;
    pub const MOUSE_MAX: u16 = 0xff;

    pub const MODS_MIN: u16 = 0x0100;
    pub const MODS_MAX: u16 = 0x1fff;
    pub const MOD_CTRL: u16 = 0x0100;
    pub const MOD_SHIFT: u16 = 0x0200;
    pub const MOD_ALT: u16 = 0x0400;
    pub const MOD_GUI: u16 = 0x0800;
    pub const MOD_RIGHT: u16 = 0x1000;

    pub const MAX_TAP_DANCE_N: u16 = 0xff;
    pub const TAP_DANCE_MIN: u16 = 0x5700;
    pub const TAP_DANCE_MAX: u16 = TAP_DANCE_MIN + MAX_TAP_DANCE_N;

    pub const BOOTLOADER: u16 = 0x5c00;

    pub const USER_MIN: u16 = 0x7e40;
    pub const USER_MAX: u16 = 0x7fff;

    /// The basic keycode a modifier-wrapped keycode sends.
    pub const fn base_code(code: u16) -> u16 {
        if code >= MODS_MIN && code <= MODS_MAX {
            code & 0xff
        } else {
            code
        }
    }

    /// The wrapper modifier bits of `code` shifted down to the low byte (ctrl = 1, shift = 2,
    /// alt = 4, gui = 8, right-hand = 16).
    pub const fn mod_bits(code: u16) -> u8 {
        if code >= MODS_MIN && code <= MODS_MAX {
            ((code >> 8) & 0x1f) as u8
        } else {
            0
        }
    }
}

use key_range::{MOD_ALT, MOD_CTRL, MOD_GUI, MOD_SHIFT};

/// `C(kc)`: hold left control while sending `kc`.
pub const fn lctl(kc: u16) -> u16 {
    kc | MOD_CTRL
}

/// `S(kc)`: hold left shift while sending `kc`.
pub const fn lsft(kc: u16) -> u16 {
    kc | MOD_SHIFT
}

/// `A(kc)`: hold left alt while sending `kc`.
pub const fn lalt(kc: u16) -> u16 {
    kc | MOD_ALT
}

/// `G(kc)`: hold left gui while sending `kc`.
pub const fn lgui(kc: u16) -> u16 {
    kc | MOD_GUI
}

pub const fn ctl_sft(kc: u16) -> u16 {
    kc | MOD_CTRL | MOD_SHIFT
}

pub const fn ctl_alt(kc: u16) -> u16 {
    kc | MOD_CTRL | MOD_ALT
}

pub const fn sft_gui(kc: u16) -> u16 {
    kc | MOD_SHIFT | MOD_GUI
}

/// Tap-dance key for slot `n`.
pub const fn td(n: u8) -> u16 {
    key_range::TAP_DANCE_MIN + n as u16
}

/// The `n`th user keycode (QMK's `SAFE_RANGE + n`).
pub const fn user(n: u8) -> u16 {
    key_range::USER_MIN + n as u16
}

pub fn tap_dance_index(code: u16) -> Option<u8> {
    match code {
        key_range::TAP_DANCE_MIN..=key_range::TAP_DANCE_MAX => {
            Some((code - key_range::TAP_DANCE_MIN) as u8)
        }
        _ => None,
    }
}

pub fn user_index(code: u16) -> Option<u16> {
    match code {
        key_range::USER_MIN..=key_range::USER_MAX => Some(code - key_range::USER_MIN),
        _ => None,
    }
}

const UNSHIFTED: &[u8; 0x39 - 0x1e] = b"1234567890\n\x1b\x08\t -=[]\\#;'`,./";
const SHIFTED: &[u8; 0x39 - 0x1e] = b"!@#$%^&*()\n\x1b\x08\t _+{}|~:\"~<>?";

/// The character a keycode types on a US ANSI layout, taking a shift wrapper into account.
/// Returns `None` for anything that is not a printable character.
///
/// ```
/// use plk_common::keycodes::{kc, us_ascii};
///
/// assert_eq!(us_ascii(kc::EXLM), Some('!'));
/// assert_eq!(us_ascii(kc::BSLS), Some('\\'));
/// assert_eq!(us_ascii(kc::LEFT), None);
/// ```
pub const fn us_ascii(code: u16) -> Option<char> {
    let bits = key_range::mod_bits(code);
    if bits & !0x02 != 0 {
        return None;
    }
    let shifted = bits != 0;
    let base = key_range::base_code(code);
    match base {
        0x04..=0x1d => {
            let c = (base - key_range::BASIC_A) as u8;
            let c = if shifted { b'A' + c } else { b'a' + c };
            Some(c as char)
        }
        0x1e..=0x38 => {
            let i = (base - key_range::BASIC_1) as usize;
            let c = if shifted { SHIFTED[i] } else { UNSHIFTED[i] };
            if c.is_ascii_graphic() || c == b' ' {
                Some(c as char)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Named keycodes. Names follow QMK with the `KC_` prefix dropped; digits are `N0`..`N9`.
pub mod kc {
    use super::lsft;

    pub const NO: u16 = super::key_range::NO;
    pub const TRNS: u16 = super::key_range::TRANSPARENT;

    pub const A: u16 = 0x04;
    pub const B: u16 = 0x05;
    pub const C: u16 = 0x06;
    pub const D: u16 = 0x07;
    pub const E: u16 = 0x08;
    pub const F: u16 = 0x09;
    pub const G: u16 = 0x0a;
    pub const H: u16 = 0x0b;
    pub const I: u16 = 0x0c;
    pub const J: u16 = 0x0d;
    pub const K: u16 = 0x0e;
    pub const L: u16 = 0x0f;
    pub const M: u16 = 0x10;
    pub const N: u16 = 0x11;
    pub const O: u16 = 0x12;
    pub const P: u16 = 0x13;
    pub const Q: u16 = 0x14;
    pub const R: u16 = 0x15;
    pub const S: u16 = 0x16;
    pub const T: u16 = 0x17;
    pub const U: u16 = 0x18;
    pub const V: u16 = 0x19;
    pub const W: u16 = 0x1a;
    pub const X: u16 = 0x1b;
    pub const Y: u16 = 0x1c;
    pub const Z: u16 = 0x1d;
    pub const N1: u16 = 0x1e;
    pub const N2: u16 = 0x1f;
    pub const N3: u16 = 0x20;
    pub const N4: u16 = 0x21;
    pub const N5: u16 = 0x22;
    pub const N6: u16 = 0x23;
    pub const N7: u16 = 0x24;
    pub const N8: u16 = 0x25;
    pub const N9: u16 = 0x26;
    pub const N0: u16 = 0x27;
    pub const ENT: u16 = 0x28;
    pub const ESC: u16 = 0x29;
    pub const BSPC: u16 = 0x2a;
    pub const TAB: u16 = 0x2b;
    pub const SPC: u16 = 0x2c;
    pub const MINS: u16 = 0x2d;
    pub const EQL: u16 = 0x2e;
    pub const LBRC: u16 = 0x2f;
    pub const RBRC: u16 = 0x30;
    pub const BSLS: u16 = 0x31;
    pub const NUHS: u16 = 0x32;
    pub const SCLN: u16 = 0x33;
    pub const QUOT: u16 = 0x34;
    pub const GRV: u16 = 0x35;
    pub const COMM: u16 = 0x36;
    pub const DOT: u16 = 0x37;
    pub const SLSH: u16 = 0x38;
    pub const CAPS: u16 = 0x39;
    pub const F1: u16 = 0x3a;
    pub const F2: u16 = 0x3b;
    pub const F3: u16 = 0x3c;
    pub const F4: u16 = 0x3d;
    pub const F5: u16 = 0x3e;
    pub const F6: u16 = 0x3f;
    pub const F7: u16 = 0x40;
    pub const F8: u16 = 0x41;
    pub const F9: u16 = 0x42;
    pub const F10: u16 = 0x43;
    pub const F11: u16 = 0x44;
    pub const F12: u16 = 0x45;
    pub const PSCR: u16 = 0x46;
    pub const SLCK: u16 = 0x47;
    pub const PAUS: u16 = 0x48;
    pub const INS: u16 = 0x49;
    pub const HOME: u16 = 0x4a;
    pub const PGUP: u16 = 0x4b;
    pub const DEL: u16 = 0x4c;
    pub const END: u16 = 0x4d;
    pub const PGDN: u16 = 0x4e;
    pub const RGHT: u16 = 0x4f;
    pub const LEFT: u16 = 0x50;
    pub const DOWN: u16 = 0x51;
    pub const UP: u16 = 0x52;
    pub const NLCK: u16 = 0x53;
    pub const APP: u16 = 0x65;
    pub const F13: u16 = 0x68;
    pub const F14: u16 = 0x69;
    pub const F15: u16 = 0x6a;
    pub const F16: u16 = 0x6b;
    pub const F17: u16 = 0x6c;
    pub const F18: u16 = 0x6d;
    pub const F19: u16 = 0x6e;
    pub const F20: u16 = 0x6f;
    pub const F21: u16 = 0x70;
    pub const F22: u16 = 0x71;
    pub const F23: u16 = 0x72;
    pub const F24: u16 = 0x73;

    pub const PWR: u16 = 0xa5;
    pub const SLEP: u16 = 0xa6;
    pub const WAKE: u16 = 0xa7;

    pub const MUTE: u16 = 0xa8;
    pub const VOLU: u16 = 0xa9;
    pub const VOLD: u16 = 0xaa;
    pub const MNXT: u16 = 0xab;
    pub const MPRV: u16 = 0xac;
    pub const MSTP: u16 = 0xad;
    pub const MPLY: u16 = 0xae;
    pub const MSEL: u16 = 0xaf;

    pub const LCTL: u16 = 0xe0;
    pub const LSFT: u16 = 0xe1;
    pub const LALT: u16 = 0xe2;
    pub const LGUI: u16 = 0xe3;
    pub const RCTL: u16 = 0xe4;
    pub const RSFT: u16 = 0xe5;
    pub const RALT: u16 = 0xe6;
    pub const RGUI: u16 = 0xe7;

    pub const MS_U: u16 = 0xf0;
    pub const MS_D: u16 = 0xf1;
    pub const MS_L: u16 = 0xf2;
    pub const MS_R: u16 = 0xf3;
    pub const BTN1: u16 = 0xf4;
    pub const BTN2: u16 = 0xf5;
    pub const BTN3: u16 = 0xf6;
    pub const BTN4: u16 = 0xf7;
    pub const BTN5: u16 = 0xf8;
    pub const WH_U: u16 = 0xf9;
    pub const WH_D: u16 = 0xfa;
    pub const WH_L: u16 = 0xfb;
    pub const WH_R: u16 = 0xfc;
    pub const ACL0: u16 = 0xfd;
    pub const ACL1: u16 = 0xfe;
    pub const ACL2: u16 = 0xff;

    pub const TILD: u16 = lsft(GRV);
    pub const EXLM: u16 = lsft(N1);
    pub const AT: u16 = lsft(N2);
    pub const HASH: u16 = lsft(N3);
    pub const DLR: u16 = lsft(N4);
    pub const PERC: u16 = lsft(N5);
    pub const CIRC: u16 = lsft(N6);
    pub const AMPR: u16 = lsft(N7);
    pub const ASTR: u16 = lsft(N8);
    pub const LPRN: u16 = lsft(N9);
    pub const RPRN: u16 = lsft(N0);
    pub const UNDS: u16 = lsft(MINS);
    pub const PLUS: u16 = lsft(EQL);
    pub const LCBR: u16 = lsft(LBRC);
    pub const RCBR: u16 = lsft(RBRC);
    pub const PIPE: u16 = lsft(BSLS);
    pub const COLN: u16 = lsft(SCLN);
    pub const DQUO: u16 = lsft(QUOT);
    pub const LABK: u16 = lsft(COMM);
    pub const RABK: u16 = lsft(DOT);
    pub const QUES: u16 = lsft(SLSH);

    pub const BOOTLOADER: u16 = super::key_range::BOOTLOADER;
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
