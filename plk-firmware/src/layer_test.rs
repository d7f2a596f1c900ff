use super::*;

#[test]
fn on_off() {
    let mut state = LayerState::new();
    assert_eq!(state.highest(), 0);

    assert!(state.on(2));
    assert!(!state.on(2));
    assert!(state.on(4));
    assert!(state.is_on(2));
    assert!(state.is_on(4));
    assert!(!state.is_on(3));
    assert_eq!(state.bits(), 0b10100);
    assert_eq!(state.highest(), 4);

    assert!(state.off(4));
    assert_eq!(state.highest(), 2);
}

#[test]
fn off_is_idempotent() {
    let mut state = LayerState::from_bits(0b110);
    assert!(state.off(1));
    let snapshot = state;
    assert!(!state.off(1));
    assert_eq!(state, snapshot);
    assert!(!state.off(3));
    assert_eq!(state.bits(), 0b100);
}

#[test]
fn out_of_range_is_ignored() {
    let mut state = LayerState::new();
    assert!(!state.on(MAX_LAYERS));
    assert!(!state.off(200));
    assert!(!state.is_on(MAX_LAYERS));
    assert_eq!(state, LayerState::new());
}

#[test]
fn snapshot_restore() {
    let mut state = LayerState::new();
    state.on(1);
    let saved = state;
    state.on(3);
    state.off(1);
    assert_ne!(state, saved);
    state = saved;
    assert!(state.is_on(1));
    assert!(!state.is_on(3));
    state.clear();
    assert_eq!(state.bits(), 0);
}
