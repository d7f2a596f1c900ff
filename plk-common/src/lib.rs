#![no_std]
//! Keycode space shared between the `plk-firmware` keymaps and the `plk-config` host tool.
//!
//! Keycodes are plain `u16` values laid out the same way QMK lays them out so that keymaps read
//! like their C counterparts: basic HID usages in the low byte, modifier wrappers in bits 8..12,
//! and quantum ranges (tap-dance, bootloader, user keys) above that.

pub mod keycodes;
