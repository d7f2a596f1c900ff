//! Planck `otownend`: MOVE and MOUSE share a tap-dance key on the home row and right thumb. Hold
//! it for MOVE, double tap to latch MOUSE, single tap to drop MOUSE again.

use plk_common::keycodes::{ctl_alt, kc::*, td};

use super::{
    custom::{FUNC, SYMB},
    XXXXXXX, _______, MOVE_MOUSE,
};
use crate::{keymap::Keymap, layout_planck_grid};

const MV_MS: u16 = td(MOVE_MOUSE);

#[rustfmt::skip]
pub(super) const KEYMAP: Keymap<4, 12, 5> = Keymap::new([
    /* QWERTY
     * ,-----------------------------------------------------------------------.
     * |Tab  |  Q  |  W  |  E  |  R  |  T  |  Y  |  U  |  I  |  O  |  P  |Bksp |
     * |-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----|
     * |Move |  A  |  S  |  D  |  F  |  G  |  H  |  J  |  K  |  L  |  ;  |  '  |
     * |-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----|
     * |Shift|  Z  |  X  |  C  |  V  |  B  |  N  |  M  |  ,  |  .  |  /  |Shift|
     * |-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----|
     * |Ctrl |Func |Super| Alt |Symb |Enter|Space|Move |  [  |  ]  |  \  |Ctrl |
     * `-----------------------------------------------------------------------'
     */
    layout_planck_grid!(
        TAB,   Q,    W,    E,    R,    T,    Y,    U,     I,    O,    P,    BSPC,
        MV_MS, A,    S,    D,    F,    G,    H,    J,     K,    L,    SCLN, QUOT,
        LSFT,  Z,    X,    C,    V,    B,    N,    M,     COMM, DOT,  SLSH, RSFT,
        LCTL,  FUNC, LGUI, LALT, SYMB, ENT,  SPC,  MV_MS, LBRC, RBRC, BSLS, RCTL,
    ),
    // SYMB
    layout_planck_grid!(
        ESC,     N1,      N2,      N3,      N4,      N5,      N6,      N7,      N8,      N9,      N0,      DEL,
        _______, EXLM,    AT,      HASH,    DLR,     PERC,    CIRC,    AMPR,    ASTR,    XXXXXXX, XXXXXXX, _______,
        _______, TILD,    GRV,     PLUS,    EQL,     PIPE,    BSLS,    XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
        _______, _______, _______, _______, _______, _______, _______, _______, LPRN,    RPRN,    MINS,    _______,
    ),
    // MOVE
    layout_planck_grid!(
        _______, ctl_alt(LEFT), PGUP,    UP,      PGDN,    CAPS,    ctl_alt(LEFT), PGUP,    UP,      PGDN,    CAPS,    DEL,
        _______, ctl_alt(RGHT), LEFT,    DOWN,    RGHT,    XXXXXXX, ctl_alt(RGHT), LEFT,    DOWN,    RGHT,    XXXXXXX, XXXXXXX,
        _______, XXXXXXX,       HOME,    END,     XXXXXXX, XXXXXXX, XXXXXXX,       HOME,    END,     XXXXXXX, XXXXXXX, _______,
        _______, _______,       _______, _______, _______, _______, _______,       _______, _______, _______, _______, _______,
    ),
    // FUNC
    layout_planck_grid!(
        BOOTLOADER, F1,      F2,      F3,      F4,      F5,      F6,      F7,      F8,      F9,      F10,     VOLU,
        _______,    F11,     F12,     F13,     F14,     F15,     F16,     F17,     F18,     F19,     F20,     VOLD,
        _______,    XXXXXXX, XXXXXXX, PSCR,    INS,     XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, _______,
        _______,    _______, _______, _______, MPRV,    MUTE,    MPLY,    MNXT,    _______, _______, _______, _______,
    ),
    // MOUSE
    layout_planck_grid!(
        _______, XXXXXXX, WH_U,    MS_U,    WH_D,    BTN5,    ACL0,    WH_U,    MS_U,    WH_D,    XXXXXXX, _______,
        _______, XXXXXXX, MS_L,    MS_D,    MS_R,    BTN4,    ACL1,    MS_L,    MS_D,    MS_R,    XXXXXXX, XXXXXXX,
        _______, XXXXXXX, WH_L,    XXXXXXX, WH_R,    BTN3,    ACL2,    WH_L,    XXXXXXX, WH_R,    XXXXXXX, _______,
        _______, _______, _______, _______, _______, BTN2,    BTN1,    _______, _______, _______, _______, _______,
    ),
]);

#[cfg(test)]
#[path = "otownend_test.rs"]
mod test;
