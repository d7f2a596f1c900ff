use core::sync::atomic::{AtomicBool, Ordering};

use embassy_futures::{block_on, join::join};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use plk_common::keycodes::kc;

use crate::keymaps::{PlanckLayer, OTOWNEND, OWETOW};

use super::*;

type Reports<const N: usize> = ReportChannel<NoopRawMutex, N>;

const SYMB: u32 = 1 << PlanckLayer::Symb.id();
const MOVE: u32 = 1 << PlanckLayer::Move.id();
const FUNC: u32 = 1 << PlanckLayer::Func.id();
const MOUSE: u32 = 1 << PlanckLayer::Mouse.id();

fn down(row: u8, col: u8) -> Event {
    Event::Key(ScanKey::new(row, col, true))
}

fn up(row: u8, col: u8) -> Event {
    Event::Key(ScanKey::new(row, col, false))
}

fn drain<const N: usize>(reports: &Reports<N>) -> heapless::Vec<Report, 32> {
    let mut v = heapless::Vec::new();
    while let Some(r) = reports.try_receive() {
        v.push(r).unwrap();
    }
    v
}

#[test]
fn scan_key() {
    let k = ScanKey::new(3, 7, true);
    assert_eq!((k.row(), k.column(), k.is_down()), (3, 7, true));
    let k2 = ScanKey::new(3, 7, false);
    assert!(!k2.is_down());
    assert_eq!((k2.row(), k2.column()), (3, 7));
}

#[test]
fn symb_then_exclamation() {
    let reports = Reports::<16>::default();
    let mut keyboard = Keyboard::new(&OWETOW, &reports);

    keyboard.handle(down(3, 4));
    keyboard.handle(down(1, 1));
    keyboard.handle(up(1, 1));
    keyboard.handle(up(3, 4));

    assert_eq!(
        drain(&reports),
        [Report::Layers(SYMB), Report::Char('!'), Report::Layers(0)]
    );
    assert_eq!(keyboard.layers(), LayerState::new());
}

#[test]
fn layer_key_drops_latched_mouse() {
    let reports = Reports::<16>::default();
    let mut keyboard = Keyboard::new(&OWETOW, &reports);

    keyboard.handle(down(3, 7));
    keyboard.handle(down(0, 11));
    keyboard.handle(up(0, 11));
    keyboard.handle(up(3, 7));
    assert_eq!(keyboard.layers().bits(), MOUSE);

    keyboard.handle(down(3, 4));
    assert_eq!(keyboard.layers().bits(), SYMB);
    keyboard.handle(up(3, 4));

    assert_eq!(
        drain(&reports),
        [
            Report::Layers(MOVE),
            Report::Layers(MOVE | MOUSE),
            Report::Layers(MOUSE),
            Report::Layers(SYMB),
            Report::Layers(0),
        ]
    );
}

#[test]
fn release_sends_what_was_pressed() {
    let reports = Reports::<16>::default();
    let mut keyboard = Keyboard::new(&OWETOW, &reports);

    keyboard.handle(down(3, 4));
    keyboard.handle(down(0, 1));
    keyboard.handle(up(3, 4));
    keyboard.handle(up(0, 1));
    keyboard.handle(down(0, 1));

    assert_eq!(
        drain(&reports),
        [
            Report::Layers(SYMB),
            Report::Key(kc::N1, true),
            Report::Layers(0),
            Report::Key(kc::N1, false),
            Report::Key(kc::Q, true),
        ]
    );
}

#[test]
fn no_keys_are_silent() {
    let reports = Reports::<16>::default();
    let mut keyboard = Keyboard::new(&OWETOW, &reports);

    keyboard.handle(down(3, 7));
    drain(&reports);
    keyboard.handle(down(1, 11));
    keyboard.handle(up(1, 11));
    keyboard.handle(down(9, 0));

    assert!(drain(&reports).is_empty());
}

#[test]
fn tap_dance_keys() {
    let reports = Reports::<16>::default();
    let mut keyboard = Keyboard::new(&OTOWNEND, &reports);

    keyboard.handle(down(1, 0));
    keyboard.handle(up(1, 0));
    keyboard.handle(Event::DanceFinished {
        index: 0,
        state: TapDanceState::new(2, false),
    });
    keyboard.handle(Event::DanceReset { index: 0 });
    keyboard.handle(down(0, 6));

    keyboard.handle(down(3, 7));
    keyboard.handle(Event::DanceFinished {
        index: 0,
        state: TapDanceState::new(1, true),
    });
    keyboard.handle(up(3, 7));
    keyboard.handle(Event::DanceReset { index: 0 });

    assert_eq!(
        drain(&reports),
        [
            Report::TapDance(0, true),
            Report::TapDance(0, false),
            Report::Layers(MOUSE),
            Report::Key(kc::ACL0, true),
            Report::TapDance(0, true),
            Report::Layers(MOVE),
            Report::TapDance(0, false),
            Report::Layers(0),
        ]
    );
}

static BOOTLOADER_CALLED: AtomicBool = AtomicBool::new(false);

fn enter_bootloader() {
    BOOTLOADER_CALLED.store(true, Ordering::SeqCst);
}

static BOOTLOADER_HOOK: fn() = enter_bootloader;

#[test]
fn bootloader_on_release() {
    firmware_functions::handle_reset_to_bootloader(Some(&BOOTLOADER_HOOK));
    let reports = Reports::<16>::default();
    let mut keyboard = Keyboard::new(&OTOWNEND, &reports);

    keyboard.handle(down(3, 1));
    keyboard.handle(down(0, 0));
    assert!(!BOOTLOADER_CALLED.load(Ordering::SeqCst));
    keyboard.handle(up(0, 0));
    assert!(BOOTLOADER_CALLED.load(Ordering::SeqCst));

    assert_eq!(drain(&reports), [Report::Layers(FUNC)]);
}

#[test]
fn report_overflow_clears() {
    let reports = Reports::<2>::default();
    let mut keyboard = Keyboard::new(&OWETOW, &reports);

    keyboard.handle(down(3, 4));
    keyboard.handle(down(1, 1));
    keyboard.handle(down(1, 2));

    assert_eq!(drain(&reports), [Report::Clear]);
}

#[test]
fn clear_all() {
    let reports = Reports::<16>::default();
    let mut keyboard = Keyboard::new(&OTOWNEND, &reports);

    keyboard.handle(down(3, 4));
    keyboard.handle(down(1, 0));
    keyboard.handle(Event::DanceFinished {
        index: 0,
        state: TapDanceState::new(1, true),
    });
    keyboard.handle(Event::ClearAll);

    assert_eq!(drain(&reports), [Report::Clear]);
    assert_eq!(keyboard.layers(), LayerState::new());

    keyboard.handle(up(3, 4));
    keyboard.handle(up(1, 0));
    keyboard.handle(Event::DanceReset { index: 0 });
    assert!(drain(&reports).is_empty());
}

#[test]
fn run_until_exit() {
    let events = EventChannel::<NoopRawMutex, 8>::default();
    let reports = Reports::<16>::default();
    let mut keyboard = Keyboard::new(&OWETOW, &reports);

    block_on(join(keyboard.run(&events), async {
        for e in [down(3, 4), down(2, 10), up(2, 10), up(3, 4), Event::Exit] {
            events.send(e).await;
        }
    }));

    assert_eq!(
        drain(&reports),
        [Report::Layers(SYMB), Report::Char('}'), Report::Layers(0)]
    );
}
