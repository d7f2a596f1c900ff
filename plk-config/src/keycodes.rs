//! QMK keycode mnemonics. Names are matched case-insensitively with or without the `KC_` prefix.

use std::collections::HashMap;

use lazy_static::lazy_static;
use plk_common::keycodes::{
    ctl_alt, ctl_sft, key_range, lalt, lctl, lgui, lsft, sft_gui, tap_dance_index, user_index,
};

/// Wrapper functions in the order they nest when rendering, outermost first.
const WRAPPERS: [(&str, u16); 4] = [
    ("C", key_range::MOD_CTRL),
    ("S", key_range::MOD_SHIFT),
    ("A", key_range::MOD_ALT),
    ("G", key_range::MOD_GUI),
];

const RIGHT_WRAPPERS: [&str; 4] = ["RCTL", "RSFT", "RALT", "RGUI"];

/// Left-hand wrapper functions by every name QMK gives them.
const LEFT_WRAPPERS: [(&str, fn(u16) -> u16); 17] = [
    ("C", lctl),
    ("LCTL", lctl),
    ("S", lsft),
    ("LSFT", lsft),
    ("A", lalt),
    ("LALT", lalt),
    ("LOPT", lalt),
    ("G", lgui),
    ("LGUI", lgui),
    ("LCMD", lgui),
    ("LWIN", lgui),
    ("C_S", ctl_sft),
    ("LCS", ctl_sft),
    ("LCA", ctl_alt),
    ("SGUI", sft_gui),
    ("SCMD", sft_gui),
    ("SWIN", sft_gui),
];

fn add(list: &mut Vec<KeycodeDesc>, names: &'static str, code: u16) {
    for name in names.split('/') {
        list.push(KeycodeDesc { name, code });
    }
}

lazy_static! {
    static ref KEYCODES: Vec<KeycodeDesc> = {
        let mut list = Vec::new();

        // contiguous HID usage page from 0x04
        for (i, names) in r#"
A B C D E F G H I J K L M N O P Q R S T U V W X Y Z
1/N1 2/N2 3/N3 4/N4 5/N5 6/N6 7/N7 8/N8 9/N9 0/N0
ENT/ENTER ESC/ESCAPE BSPC/BACKSPACE TAB SPC/SPACE MINS/MINUS EQL/EQUAL
LBRC/LEFT_BRACKET RBRC/RIGHT_BRACKET BSLS/BACKSLASH NUHS/NONUS_HASH
SCLN/SEMICOLON QUOT/QUOTE GRV/GRAVE COMM/COMMA DOT SLSH/SLASH CAPS/CAPS_LOCK
F1 F2 F3 F4 F5 F6 F7 F8 F9 F10 F11 F12
PSCR/PRINT_SCREEN SCRL/SLCK/SCROLL_LOCK PAUS/PAUSE INS/INSERT
HOME PGUP/PAGE_UP DEL/DELETE END PGDN/PAGE_DOWN RGHT/RIGHT LEFT DOWN UP
NUM/NLCK/NUM_LOCK PSLS PAST PMNS PPLS PENT P1 P2 P3 P4 P5 P6 P7 P8 P9 P0 PDOT
NUBS/NONUS_BACKSLASH APP/APPLICATION KB_POWER PEQL
F13 F14 F15 F16 F17 F18 F19 F20 F21 F22 F23 F24
"#
        .split_whitespace()
        .enumerate()
        {
            add(&mut list, names, key_range::BASIC_MIN + i as u16);
        }

        for (i, names) in "PWR/SYSTEM_POWER SLEP/SYSTEM_SLEEP WAKE/SYSTEM_WAKE"
            .split_whitespace()
            .enumerate()
        {
            add(&mut list, names, key_range::SYSTEM_MIN + i as u16);
        }

        for (i, names) in r#"
MUTE/AUDIO_MUTE VOLU/AUDIO_VOL_UP VOLD/AUDIO_VOL_DOWN
MNXT/MEDIA_NEXT_TRACK MPRV/MEDIA_PREV_TRACK MSTP/MEDIA_STOP
MPLY/MEDIA_PLAY_PAUSE MSEL/MEDIA_SELECT
"#
        .split_whitespace()
        .enumerate()
        {
            add(&mut list, names, key_range::MEDIA_MIN + i as u16);
        }

        for (i, names) in r#"
LCTL/LEFT_CTRL LSFT/LEFT_SHIFT LALT/LOPT/LEFT_ALT LGUI/LCMD/LEFT_GUI
RCTL/RIGHT_CTRL RSFT/RIGHT_SHIFT RALT/ROPT/ALGR/RIGHT_ALT RGUI/RCMD/RIGHT_GUI
"#
        .split_whitespace()
        .enumerate()
        {
            add(&mut list, names, key_range::MODIFIER_MIN + i as u16);
        }

        for (i, names) in r#"
MS_U/MS_UP MS_D/MS_DOWN MS_L/MS_LEFT MS_R/MS_RIGHT
BTN1 BTN2 BTN3 BTN4 BTN5
WH_U/WH_UP WH_D/WH_DOWN WH_L/WH_LEFT WH_R/WH_RIGHT
ACL0 ACL1 ACL2
"#
        .split_whitespace()
        .enumerate()
        {
            add(&mut list, names, key_range::MOUSE_MIN + i as u16);
        }

        for (names, base) in [
            ("TILD/TILDE", "GRV"),
            ("EXLM/EXCLAIM", "1"),
            ("AT", "2"),
            ("HASH", "3"),
            ("DLR/DOLLAR", "4"),
            ("PERC/PERCENT", "5"),
            ("CIRC/CIRCUMFLEX", "6"),
            ("AMPR/AMPERSAND", "7"),
            ("ASTR/ASTERISK", "8"),
            ("LPRN/LEFT_PAREN", "9"),
            ("RPRN/RIGHT_PAREN", "0"),
            ("UNDS/UNDERSCORE", "MINS"),
            ("PLUS", "EQL"),
            ("LCBR/LEFT_CURLY_BRACE", "LBRC"),
            ("RCBR/RIGHT_CURLY_BRACE", "RBRC"),
            ("PIPE", "BSLS"),
            ("COLN/COLON", "SCLN"),
            ("DQUO/DQT/DOUBLE_QUOTE", "QUOT"),
            ("LABK/LT/LEFT_ANGLE_BRACKET", "COMM"),
            ("RABK/GT/RIGHT_ANGLE_BRACKET", "DOT"),
            ("QUES/QUESTION", "SLSH"),
        ] {
            let Some(code) = list.iter().find(|d| d.name == base).map(|d| d.code) else {
                panic!("no base key {base}");
            };
            add(&mut list, names, code | key_range::MOD_SHIFT);
        }

        add(&mut list, "NO/XXXXXXX", key_range::NO);
        add(&mut list, "TRNS/_______/TRANSPARENT", key_range::TRANSPARENT);
        add(&mut list, "BOOTLOADER/QK_BOOT/RESET", key_range::BOOTLOADER);

        list
    };
    static ref KEY_NAMES: HashMap<String, u16> = {
        let mut m = HashMap::new();
        for d in KEYCODES.iter() {
            if m.insert(d.name.to_string(), d.code).is_some() {
                panic!("key already added {}", d.name);
            }
        }
        m
    };
    static ref CODE_NAMES: HashMap<u16, &'static str> = {
        let mut m = HashMap::new();
        for d in KEYCODES.iter() {
            m.entry(d.code).or_insert(d.name);
        }
        m
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeycodeDesc {
    pub name: &'static str,
    pub code: u16,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum CodeType {
    Basic,
    System,
    Media,
    Modifier,
    Mouse,
    /// Modifier-wrapped keycodes such as the shifted symbols.
    Wrapped,
    /// No-op, transparent, tap-dance, bootloader and user keycodes.
    Special,
}

impl CodeType {
    pub fn of(code: u16) -> Self {
        match code {
            key_range::BASIC_MIN..=key_range::BASIC_MAX => Self::Basic,
            key_range::SYSTEM_MIN..=key_range::SYSTEM_MAX => Self::System,
            key_range::MEDIA_MIN..=key_range::MEDIA_MAX => Self::Media,
            key_range::MODIFIER_MIN..=key_range::MODIFIER_MAX => Self::Modifier,
            key_range::MOUSE_MIN..=key_range::MOUSE_MAX => Self::Mouse,
            key_range::MODS_MIN..=key_range::MODS_MAX => Self::Wrapped,
            _ => Self::Special,
        }
    }
}

/// Every named keycode, aliases included.
pub fn keycodes_iter() -> impl Iterator<Item = KeycodeDesc> {
    KEYCODES.iter().copied()
}

fn normalize(name: &str) -> String {
    let name = name.trim().to_ascii_uppercase();
    match name.strip_prefix("KC_") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => name,
    }
}

/// Look up a keycode by name. Besides the plain names this understands the wrapper functions
/// `C(..)`, `S(..)`, `A(..)`, `G(..)` and their long forms, the combined `LCS(..)`, `LCA(..)`,
/// `SGUI(..)`, the right-hand `RCTL(..)`, `RSFT(..)`, `RALT(..)`, `RGUI(..)` (nested, as in
/// `C(S(TAB))`), `TD(n)` and `USER(n)`.
pub fn key_code(name: &str) -> Option<u16> {
    let name = normalize(name);
    if let Some(code) = KEY_NAMES.get(name.as_str()) {
        return Some(*code);
    }
    let (func, arg) = name.strip_suffix(')')?.split_once('(')?;
    match func {
        "TD" => {
            let n: u16 = arg.trim().parse().ok()?;
            (n <= key_range::MAX_TAP_DANCE_N).then_some(key_range::TAP_DANCE_MIN + n)
        }
        "USER" => {
            let n: u16 = arg.trim().parse().ok()?;
            let code = key_range::USER_MIN.checked_add(n)?;
            (code <= key_range::USER_MAX).then_some(code)
        }
        _ => {
            let inner = key_code(arg)?;
            if !(key_range::BASIC_MIN..=key_range::MODS_MAX).contains(&inner) {
                return None;
            }
            if let Some((_, wrap)) = LEFT_WRAPPERS.iter().find(|(n, _)| *n == func) {
                return Some(wrap(inner));
            }
            RIGHT_WRAPPERS
                .iter()
                .position(|n| *n == func)
                .map(|i| inner | WRAPPERS[i].1 | key_range::MOD_RIGHT)
        }
    }
}

/// The canonical name of a keycode. Wrapped keycodes without a name of their own are rendered as
/// nested wrapper calls, such as `C(S(TAB))`.
pub fn key_name(code: u16) -> String {
    if let Some(name) = CODE_NAMES.get(&code) {
        return name.to_string();
    }
    if let Some(i) = tap_dance_index(code) {
        return format!("TD({i})");
    }
    if let Some(i) = user_index(code) {
        return format!("USER({i})");
    }
    let bits = key_range::mod_bits(code) as u16;
    if bits & 0xf == 0 {
        return format!("0x{code:04X}");
    }
    let right = bits & 0x10 != 0;
    let mut name = key_name(key_range::base_code(code));
    for (i, &(func, bit)) in WRAPPERS.iter().enumerate().rev() {
        if code & bit != 0 {
            let func = if right { RIGHT_WRAPPERS[i] } else { func };
            name = format!("{func}({name})");
        }
    }
    name
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
