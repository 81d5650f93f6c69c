//! Hand over edge capture from the interrupt handler to the polling loop.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::log;
use crate::peripheral::EdgeCaptureRegister;

/// Cell holding the latest edge capture snapshot.
///
/// Written by the interrupt handler, read by the polling loop. There is no
/// queue, if two interrupts fire before a read, only the latter survives.
///
/// Writes are accepted only while the cell is armed. This keeps a handler
/// firing after teardown from leaking into a later, unrelated run.
///
/// Checking the gate and storing the value are two steps. `disarm` must
/// therefore never run while a `write` is in progress. On a single core this
/// holds when `disarm` is called with the handler's interrupt masked, as the
/// RTIC lock around the button port does. Writers on other cores have to be
/// serialized with `disarm` the same way.
#[derive(Debug, Default)]
pub struct EdgeCapture {
    value: AtomicU32,
    armed: AtomicBool,
}

impl EdgeCapture {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: AtomicU32::new(0),
            armed: AtomicBool::new(false),
        }
    }

    /// Store a snapshot, returning whether it was accepted.
    pub fn write(&self, value: u32) -> bool {
        if !self.is_armed() {
            return false;
        }
        self.value.store(value, Ordering::Release);
        true
    }

    #[must_use]
    pub fn read(&self) -> u32 {
        self.value.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        self.value.store(0, Ordering::Release);
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::Release);
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EdgeCapture {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "EdgeCapture(value: {:#x}, armed: {})",
            self.read(),
            self.is_armed()
        );
    }
}

/// What happened with the register value read by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Delivery {
    Stored(u32),
    /// The store was already disarmed, the value was dropped.
    Stale(u32),
}

/// Interrupt handler of the button port, bound to a single store.
#[derive(Debug, Clone, Copy)]
pub struct Handler<'a> {
    capture: &'a EdgeCapture,
}

impl<'a> Handler<'a> {
    #[must_use]
    pub fn new(capture: &'a EdgeCapture) -> Self {
        Self { capture }
    }

    /// Move the latched edges into the store and clear the register.
    ///
    /// Meant to be called from the interrupt context. It neither blocks nor
    /// allocates.
    pub fn handle(&self, register: &mut impl EdgeCaptureRegister) -> Delivery {
        let value = register.read_edge_capture();
        let stored = self.capture.write(value);
        register.clear_edge_capture();

        // The clearing write may not have reached the peripheral before the
        // handler returns, which would immediately re-trigger the interrupt.
        // Reading back waits for it to land.
        let _ = register.read_edge_capture();

        if stored {
            Delivery::Stored(value)
        } else {
            log::warning!("Dropping edge capture={:#x} after disarm", value);
            Delivery::Stale(value)
        }
    }

    #[must_use]
    pub fn is_bound_to(&self, capture: &EdgeCapture) -> bool {
        core::ptr::eq(self.capture, capture)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Handler<'_> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Handler({})", self.capture);
    }
}
