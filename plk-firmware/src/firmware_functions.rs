//! Hooks into the board for keycodes that leave the keymap, such as jumping to the bootloader.
//!
//! Nothing in this crate knows how to reset the MCU. The board crate registers both hooks at
//! startup with [handle_reset] and [handle_reset_to_bootloader]; until it does, [reset] (and the
//! `reset-on-panic` handler that calls it) and [reset_to_bootloader] do nothing.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;

pub type ResetFn = &'static (dyn Fn() + Sync);

struct Functions {
    reset: Option<ResetFn>,
    reset_to_bootloader: Option<ResetFn>,
}

const fn default_functions() -> Functions {
    Functions {
        reset: None,
        reset_to_bootloader: None,
    }
}

static FUNCTIONS: CriticalSectionMutex<RefCell<Functions>> =
    CriticalSectionMutex::new(RefCell::new(default_functions()));

/// Run the registered reset hook. Returns false when no hook is registered.
pub fn reset() -> bool {
    FUNCTIONS.lock(|r| {
        let mut guard = r.borrow_mut();
        if let Some(f) = guard.reset.take() {
            f();
            true
        } else {
            false
        }
    })
}

/// Run the registered bootloader hook. Returns false when no hook is registered.
pub fn reset_to_bootloader() -> bool {
    FUNCTIONS.lock(|r| {
        let mut guard = r.borrow_mut();
        if let Some(f) = guard.reset_to_bootloader.take() {
            f();
            true
        } else {
            crate::info!("no bootloader hook registered");
            false
        }
    })
}

/// Register a function that will reset the MCU when [reset] is called.
pub fn handle_reset(value: Option<ResetFn>) {
    FUNCTIONS.lock(|r| {
        let mut guard = r.borrow_mut();
        guard.reset = value;
    });
}

/// Register a function that jumps to the bootloader when the `BOOTLOADER` key is released.
pub fn handle_reset_to_bootloader(value: Option<ResetFn>) {
    FUNCTIONS.lock(|r| {
        let mut guard = r.borrow_mut();
        guard.reset_to_bootloader = value;
    });
}

#[cfg(all(not(test), feature = "reset-on-panic", target_os = "none"))]
mod panic {
    #[panic_handler]
    fn panic(_info: &core::panic::PanicInfo) -> ! {
        let _ = super::reset();

        loop {}
    }
}

#[cfg(test)]
#[path = "firmware_functions_test.rs"]
mod test;
