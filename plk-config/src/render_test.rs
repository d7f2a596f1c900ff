use plk_common::keycodes::{kc, lctl};
use plk_firmware::keymaps::{custom, OTOWNEND, OWETOW};

use super::*;

#[test]
fn labels() {
    assert_eq!(label(&OWETOW, kc::NO), "/////");
    assert_eq!(label(&OWETOW, kc::TRNS), "");
    assert_eq!(label(&OWETOW, custom::SYMB), "SYMB");
    assert_eq!(label(&OWETOW, kc::EXLM), "!");
    assert_eq!(label(&OWETOW, kc::BSLS), "\\");
    assert_eq!(label(&OWETOW, kc::A), "A");
    assert_eq!(label(&OWETOW, kc::N1), "1");
    assert_eq!(label(&OWETOW, lctl(kc::UP)), "C(UP)");
}

#[test]
fn qwerty_diagram() {
    let text = render_layer(&OWETOW, 0).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], format!(",{}.", "-".repeat(71)));
    assert_eq!(
        lines[1],
        "|TAB  |  Q  |  W  |  E  |  R  |  T  |  Y  |  U  |  I  |  O  |  P  |  -  |"
    );
    assert_eq!(
        lines[2],
        "|-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----|"
    );
    assert_eq!(
        lines[7],
        "|LCTL |LGUI |LALT |FUNC |SYMB |ENT  |SPC  |MOVE |RALT |RGUI |FUNC |RCTL |"
    );
    assert_eq!(lines[8], format!("`{}'", "-".repeat(71)));
}

#[test]
fn transparent_and_no() {
    let text = render_layer(&OWETOW, 2).unwrap();
    let row = text.lines().nth(3).unwrap();
    assert_eq!(
        row,
        "|     |     |     |     |     |     |C(LEF|LEFT |DOWN |RGHT |C(RGH|/////|"
    );
}

#[test]
fn whole_keymap() {
    let text = render_keymap(&OTOWNEND);
    assert!(text.starts_with("QWERTY\n,"));
    assert!(text.contains("\nMOUSE\n"));
    assert!(text.contains("|TD(0)|"));
    assert_eq!(text.lines().count(), 5 * 10 + 4);
    assert!(render_layer(&OTOWNEND, 5).is_none());
}
