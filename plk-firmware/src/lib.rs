//! Per-user keymap policy for a Planck-style keyboard, sitting on top of a host firmware runtime.
//!
//! The host scans the matrix, debounces, times tap-dance gestures and talks USB. This crate
//! decides which keycode a position produces ([keymap]), what the custom layer keys and symbol
//! overrides do ([dispatch]) and how tap-dance gestures change layers ([tap_dance]).
//! [keyboard] wires those together behind a pair of channels.
#![no_std]
pub mod dispatch;
pub mod firmware_functions;
pub mod keyboard;
pub mod keymap;
pub mod keymaps;
pub mod layer;
pub mod tap_dance;

#[cfg(any(test, feature = "test-utils"))]
pub mod host_test_stub;

#[macro_use]
mod macros;
