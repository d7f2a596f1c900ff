use plk_common::keycodes::{kc, lalt, lctl, tap_dance_index};

use crate::{
    keymaps::{custom, PlanckLayer, OWETOW},
    layer::LayerState,
};

fn layers(list: &[PlanckLayer]) -> LayerState {
    let mut layers = LayerState::new();
    for l in list {
        layers.on(l.id());
    }
    layers
}

#[test]
fn base_is_never_transparent() {
    assert_eq!(OWETOW.keymap.transparent_base_positions().count(), 0);
}

#[test]
fn base_layer() {
    let keymap = &OWETOW.keymap;
    let base = LayerState::new();
    assert_eq!(keymap.find_code(&base, 0, 0), kc::TAB);
    assert_eq!(keymap.find_code(&base, 0, 11), kc::MINS);
    assert_eq!(keymap.find_code(&base, 1, 0), kc::BSPC);
    assert_eq!(keymap.find_code(&base, 3, 3), custom::FUNC);
    assert_eq!(keymap.find_code(&base, 3, 4), custom::SYMB);
    assert_eq!(keymap.find_code(&base, 3, 7), custom::MOVE);
    assert_eq!(keymap.find_code(&base, 3, 10), custom::FUNC);
}

#[test]
fn upper_layers() {
    let keymap = &OWETOW.keymap;

    let symb = layers(&[PlanckLayer::Symb]);
    assert_eq!(keymap.find_code(&symb, 1, 1), kc::EXLM);
    assert_eq!(keymap.find_code(&symb, 0, 11), lalt(kc::MINS));
    assert_eq!(keymap.find_code(&symb, 1, 11), lalt(kc::N3));
    // transparent falls through to base
    assert_eq!(keymap.find_code(&symb, 2, 0), kc::LSFT);
    assert_eq!(keymap.find_code(&symb, 3, 4), custom::SYMB);

    let mv = layers(&[PlanckLayer::Move]);
    assert_eq!(keymap.find_code(&mv, 0, 11), custom::MOUSE);
    assert_eq!(keymap.find_code(&mv, 1, 10), lctl(kc::RGHT));
    assert_eq!(keymap.find_code(&mv, 1, 11), kc::NO);
    assert_eq!(keymap.find_code(&mv, 1, 1), kc::A);

    let func = layers(&[PlanckLayer::Func]);
    assert_eq!(keymap.find_code(&func, 0, 0), kc::BOOTLOADER);
    assert_eq!(keymap.find_code(&func, 3, 5), kc::MUTE);
}

#[test]
fn stacked_layers() {
    let keymap = &OWETOW.keymap;
    let stacked = layers(&[PlanckLayer::Symb, PlanckLayer::Mouse]);

    assert_eq!(
        keymap.find_code_and_layer(&stacked, 0, 8),
        (kc::MS_U, PlanckLayer::Mouse.id())
    );
    assert_eq!(
        keymap.find_code_and_layer(&stacked, 1, 0),
        (kc::DEL, PlanckLayer::Symb.id())
    );
    assert_eq!(keymap.find_code_and_layer(&stacked, 3, 1), (kc::LGUI, 0));
}

#[test]
fn no_tap_dance_keys() {
    assert!(OWETOW
        .keymap
        .iter()
        .all(|(_, _, _, code)| tap_dance_index(code).is_none()));
}
