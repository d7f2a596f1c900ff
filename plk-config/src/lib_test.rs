use std::path::Path;

use super::*;

#[test]
fn line_col() {
    let src = "ab\ncd x\nef";
    let err = ConfigError::new("bad".into(), 6..7);
    assert_eq!(err.line_col_slice(src), (2, 3, (3, 7)));

    let err = ConfigError::new("bad".into(), 0..1);
    assert_eq!(err.line_col_slice(src), (1, 0, (0, 2)));

    let err = ConfigError::new("bad".into(), 9..10);
    assert_eq!(err.line_col_slice(src), (3, 1, (8, 10)));

    let err: ConfigError = "no span".into();
    assert_eq!(err.line_col_slice(src), (0, 0, (0, 0)));
}

#[test]
fn long_format() {
    let err = ConfigError::new("bad".into(), 6..7);
    assert_eq!(
        err.long_format(Path::new("s.txt"), "ab\ncd x\nef"),
        "error: bad\n   --> s.txt:2:3\n  2 | cd x\n"
    );
}

#[test]
fn char_span() {
    let err = ConfigError::new("bad".into(), 3..4);
    assert_eq!(err.char_span("é x"), Some(2..3));
    let err: ConfigError = "no span".into();
    assert_eq!(err.char_span("abc"), None);
}

#[test]
fn display() {
    let err = ConfigError::new("bad".into(), 1..2);
    assert_eq!(err.to_string(), "bad\n    at: (1..2)");
    let err: ConfigError = "plain".into();
    assert_eq!(err.to_string(), "plain");
}

#[test]
fn pretty_parse_reports_span() {
    let file = Path::new("keys.plk");
    let err = pretty_parse(file, "tap 1 1\nbogus\n").unwrap_err();
    assert_eq!(err.message, "unknown command \"bogus\"");
    assert_eq!(err.span, Some(8..13));

    assert_eq!(pretty_parse(file, "tap 1 1\n").unwrap().len(), 1);
}
