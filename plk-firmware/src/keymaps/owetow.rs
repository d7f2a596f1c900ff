//! Planck `owetow`: dedicated SYMB/MOVE/FUNC thumb keys; MOUSE is latched from the MOVE layer.

use plk_common::keycodes::{ctl_sft, kc::*, lalt, lctl};

use super::{
    custom::{FUNC, MOUSE, MOVE, SYMB},
    XXXXXXX, _______,
};
use crate::{keymap::Keymap, layout_planck_grid};

#[rustfmt::skip]
pub(super) const KEYMAP: Keymap<4, 12, 5> = Keymap::new([
    /* QWERTY
     * ,-----------------------------------------------------------------------.
     * |Tab  |  Q  |  W  |  E  |  R  |  T  |  Y  |  U  |  I  |  O  |  P  |  -  |
     * |-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----|
     * |Bksp |  A  |  S  |  D  |  F  |  G  |  H  |  J  |  K  |  L  |  ;  |  '  |
     * |-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----|
     * |Shift|  Z  |  X  |  C  |  V  |  B  |  N  |  M  |  ,  |  .  |  /  |Shift|
     * |-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----|
     * |Ctrl |Super| Alt |Func |Symb |Enter|Space|Move | Alt |Super|Func |Ctrl |
     * `-----------------------------------------------------------------------'
     */
    layout_planck_grid!(
        TAB,  Q,    W,    E,    R,    T,    Y,    U,    I,    O,    P,    MINS,
        BSPC, A,    S,    D,    F,    G,    H,    J,    K,    L,    SCLN, QUOT,
        LSFT, Z,    X,    C,    V,    B,    N,    M,    COMM, DOT,  SLSH, RSFT,
        LCTL, LGUI, LALT, FUNC, SYMB, ENT,  SPC,  MOVE, RALT, RGUI, FUNC, RCTL,
    ),
    // SYMB
    layout_planck_grid!(
        ESC,     N1,      N2,      N3,      N4,      N5,      N6,      N7,      N8,      N9,      N0,      lalt(MINS),
        DEL,     EXLM,    AT,      HASH,    DLR,     PERC,    CIRC,    AMPR,    ASTR,    LPRN,    RPRN,    lalt(N3),
        _______, TILD,    GRV,     PLUS,    EQL,     PIPE,    BSLS,    LBRC,    RBRC,    LCBR,    RCBR,    _______,
        _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______, _______,
    ),
    // MOVE
    layout_planck_grid!(
        _______, _______, _______, _______, _______, _______, lctl(UP),   PGUP, UP,   PGDN,          CAPS,        MOUSE,
        _______, _______, _______, _______, _______, _______, lctl(LEFT), LEFT, DOWN, RGHT,          lctl(RGHT),  XXXXXXX,
        _______, _______, _______, _______, _______, _______, lctl(DOWN), HOME, END,  ctl_sft(TAB),  lctl(TAB),   _______,
        _______, _______, _______, _______, _______, _______, _______,    _______, _______, _______, _______,     _______,
    ),
    // FUNC
    layout_planck_grid!(
        BOOTLOADER, F1,      F2,   F3,           F4,        F5,      F6,      F7,      F8,      F9,      F10,     VOLU,
        _______,    F11,     F12,  F13,          F14,       F15,     F16,     F17,     F18,     F19,     F20,     VOLD,
        _______,    XXXXXXX, HOME, ctl_sft(TAB), lctl(TAB), END,     XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, _______,
        _______,    _______, _______, _______,   MPRV,      MUTE,    MPLY,    MNXT,    _______, _______, _______, _______,
    ),
    // MOUSE
    layout_planck_grid!(
        _______, XXXXXXX, lctl(LEFT), lctl(UP), lctl(RGHT), BTN5,    lctl(UP),   WH_U, MS_U, WH_D,         XXXXXXX,    XXXXXXX,
        _______, XXXXXXX, ACL0,       ACL1,     ACL2,       BTN4,    lctl(LEFT), MS_L, MS_D, MS_R,         lctl(RGHT), XXXXXXX,
        _______, XXXXXXX, XXXXXXX,    HOME,     END,        BTN3,    lctl(DOWN), WH_L, WH_R, ctl_sft(TAB), lctl(TAB),  _______,
        _______, _______, _______,    _______,  _______,    BTN2,    BTN1,       _______, _______, _______, _______,   _______,
    ),
]);

#[cfg(test)]
#[path = "owetow_test.rs"]
mod test;
