use plk_common::keycodes::{kc, lctl};
use plk_firmware::keymaps::{custom, OTOWNEND, OWETOW};

use super::*;

#[track_caller]
fn assert_error(src: &str, message: &str, span: Range<usize>) {
    let err = parse(src).unwrap_err();
    assert_eq!(err.message, message);
    assert_eq!(err.span, Some(span));
}

fn reports(outcomes: &[Outcome]) -> Vec<(usize, Report)> {
    outcomes.iter().map(|o| (o.step, o.report)).collect()
}

#[test]
fn parse_commands() {
    let src = "# warm up\n  down 3 4   # SYMB\nTAP 1 1\nrelease 3 4\n\ndance 0 finish 1 held\ndance 0 reset\nclear\n";
    let steps = parse(src).unwrap();

    assert_eq!(
        steps.iter().map(|s| s.command).collect::<Vec<_>>(),
        [
            Command::Down { row: 3, column: 4 },
            Command::Tap { row: 1, column: 1 },
            Command::Up { row: 3, column: 4 },
            Command::DanceFinished {
                index: 0,
                count: 1,
                held: true
            },
            Command::DanceReset { index: 0 },
            Command::Clear,
        ]
    );
    assert_eq!(steps[0].span, 12..20);
    assert_eq!(&src[steps[1].span.clone()], "TAP 1 1");
    assert_eq!(&src[steps[3].span.clone()], "dance 0 finish 1 held");
}

#[test]
fn parse_empty() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("\n  # nothing\n\n").unwrap().is_empty());
}

#[test]
fn parse_errors() {
    assert_error("down 3 4\nwiggle 1 2\n", "unknown command \"wiggle\"", 9..15);
    assert_error("down 3\n", "missing column", 5..6);
    assert_error("tap x 1", "invalid row \"x\"", 4..5);
    assert_error("tap 300 1", "invalid row \"300\"", 4..7);
    assert_error("clear now", "unexpected \"now\"", 6..9);
    assert_error(
        "dance 0 finish 2 twice",
        "unexpected \"twice\"",
        17..22,
    );
    assert_error(
        "dance 0 stop",
        "expected finish or reset, not \"stop\"",
        8..12,
    );
    assert_error("dance", "missing tap dance index", 0..5);
}

#[test]
fn tap_expands_to_press_and_release() {
    let key = ScanKey::new(1, 2, true);
    assert_eq!(
        Command::Tap { row: 1, column: 2 }.events(),
        [Event::Key(key), Event::Key(ScanKey::new(1, 2, false))]
    );
    assert_eq!(Command::Clear.events(), [Event::ClearAll]);
}

#[test]
fn symbol_layer_types_literal() {
    let steps = parse("down 3 4\ntap 1 1\nup 3 4\ntap 0 1\n").unwrap();
    let outcomes = simulate(&OWETOW, &steps).unwrap();

    assert_eq!(
        reports(&outcomes),
        [
            (0, Report::Layers(1 << 1)),
            (1, Report::Char('!')),
            (2, Report::Layers(0)),
            (3, Report::Key(kc::Q, true)),
            (3, Report::Key(kc::Q, false)),
        ]
    );
}

#[test]
fn move_mouse_tap_dance() {
    let src = "tap 1 0\ndance 0 finish 2\ntap 0 3\ndance 0 finish 1\ndance 0 finish 1 held\ndance 0 reset\n";
    let steps = parse(src).unwrap();
    let outcomes = simulate(&OTOWNEND, &steps).unwrap();

    assert_eq!(
        reports(&outcomes),
        [
            (0, Report::TapDance(0, true)),
            (0, Report::TapDance(0, false)),
            (1, Report::Layers(1 << 4)),
            (2, Report::Key(kc::MS_U, true)),
            (2, Report::Key(kc::MS_U, false)),
            (3, Report::Layers(0)),
            (4, Report::Layers(1 << 2)),
            (5, Report::Layers(0)),
        ]
    );
}

#[test]
fn simulate_checks_keymap_bounds() {
    let steps = parse("tap 0 0\ntap 4 0\n").unwrap();
    let err = simulate(&OWETOW, &steps).unwrap_err();
    assert_eq!(err.message, "4,0 is outside the 4x12 keymap");
    assert_eq!(err.span, Some(8..15));

    let steps = parse("dance 0 reset").unwrap();
    let err = simulate(&OWETOW, &steps).unwrap_err();
    assert_eq!(err.message, "keymap owetow has no tap dance 0");
}

#[test]
fn clear_resets_layers() {
    let steps = parse("down 3 4\nclear\ntap 1 1\n").unwrap();
    let outcomes = simulate(&OWETOW, &steps).unwrap();

    assert_eq!(
        reports(&outcomes),
        [
            (0, Report::Layers(1 << 1)),
            (1, Report::Clear),
            (2, Report::Key(kc::A, true)),
            (2, Report::Key(kc::A, false)),
        ]
    );
}

#[test]
fn describe_reports() {
    assert_eq!(describe(&OWETOW, &Report::Key(kc::Q, true)), "press Q");
    assert_eq!(
        describe(&OWETOW, &Report::Key(lctl(kc::UP), false)),
        "release C(UP)"
    );
    assert_eq!(
        describe(&OWETOW, &Report::Key(custom::SYMB, true)),
        "press SYMB"
    );
    assert_eq!(describe(&OWETOW, &Report::Char('!')), "type '!'");
    assert_eq!(
        describe(&OTOWNEND, &Report::TapDance(0, false)),
        "tap-dance 0 up"
    );
    assert_eq!(describe(&OWETOW, &Report::Layers(0)), "layers QWERTY");
    assert_eq!(
        describe(&OWETOW, &Report::Layers(0b10010)),
        "layers SYMB+MOUSE"
    );
    assert_eq!(describe(&OWETOW, &Report::Layers(1 << 9)), "layers 9");
    assert_eq!(describe(&OWETOW, &Report::Clear), "clear");
}

#[test]
fn simulate_with_reports_every_step() {
    let steps = parse("tap 0 1\ndown 1 0\nup 1 0\n").unwrap();
    let mut seen = Vec::new();
    simulate_with(&OTOWNEND, &steps, |i, reports| seen.push((i, reports.len()))).unwrap();
    assert_eq!(seen, [(0, 2), (1, 1), (2, 1)]);

    let steps = parse("tap 0 1\ntap 0 12\n").unwrap();
    let mut called = false;
    assert!(simulate_with(&OTOWNEND, &steps, |_, _| called = true).is_err());
    assert!(!called);
}

#[test]
fn sub_commands_ignore_case() {
    let steps = parse("DANCE 0 Finish 2 HELD\nDance 0 RESET\n").unwrap();
    assert_eq!(
        steps.iter().map(|s| s.command).collect::<Vec<_>>(),
        [
            Command::DanceFinished {
                index: 0,
                count: 2,
                held: true
            },
            Command::DanceReset { index: 0 },
        ]
    );
}
