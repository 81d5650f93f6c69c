//! Button port living in memory, used to drive tests on the host.

use crate::capture::{Delivery, Handler};
use crate::error::Error;
use crate::peripheral::{EdgeCaptureRegister, InterruptControl};

#[derive(Debug, Default)]
pub struct FakeRegister {
    pub latched: u32,
    pub reads: usize,
    pub clears: usize,
}

impl FakeRegister {
    pub fn latch(&mut self, lines: u32) {
        self.latched |= lines;
    }
}

impl EdgeCaptureRegister for FakeRegister {
    fn read_edge_capture(&mut self) -> u32 {
        self.reads += 1;
        self.latched
    }

    fn clear_edge_capture(&mut self) {
        self.clears += 1;
        self.latched = 0;
    }
}

#[derive(Debug, Default)]
pub struct FakePort<'a> {
    pub register: FakeRegister,
    pub mask: u32,
    pub handler: Option<Handler<'a>>,
    pub registrations: usize,
    pub unavailable: bool,
    pub refuse_registration: bool,
}

impl<'a> FakePort<'a> {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Latch edges of given lines and fire the interrupt if any is unmasked.
    pub fn press(&mut self, lines: u32) -> Option<Delivery> {
        self.register.latch(lines);
        if self.register.latched & self.mask == 0 {
            return None;
        }
        self.fire()
    }

    /// Invoke whatever handler is registered, as a late interrupt would.
    pub fn fire(&mut self) -> Option<Delivery> {
        let handler = self.handler?;
        Some(handler.handle(&mut self.register))
    }
}

impl<'a> InterruptControl<'a> for FakePort<'a> {
    fn set_interrupt_mask(&mut self, mask: u32) -> Result<(), Error> {
        if self.unavailable {
            return Err(Error::HardwareUnavailable);
        }
        self.mask = mask;
        Ok(())
    }

    fn register_handler(&mut self, handler: Handler<'a>) -> Result<(), Error> {
        if self.unavailable || self.refuse_registration {
            return Err(Error::HardwareUnavailable);
        }
        self.handler = Some(handler);
        self.registrations += 1;
        Ok(())
    }

    fn unregister_handler(&mut self) {
        self.handler = None;
    }
}
