//! Access to the button port, split by the context using it.
//!
//! The interrupt context only ever touches the edge capture register, while
//! the foreground arms and disarms interrupts. Keeping these apart allows the
//! firmware to hand each side its own part of the peripheral.

use crate::capture::Handler;
use crate::error::Error;

/// Register latching a bit for each line that transitioned since cleared.
///
/// Bit `K` of the value belongs to line `K`, regardless of how lines are
/// wired to the physical port.
pub trait EdgeCaptureRegister {
    fn read_edge_capture(&mut self) -> u32;

    fn clear_edge_capture(&mut self);
}

/// Interrupt configuration of the button port.
///
/// While a handler is registered, the implementor must invoke
/// [`Handler::handle`] on every interrupt of the port.
pub trait InterruptControl<'a> {
    /// Enable interrupts of lines set in `mask`, disable the rest.
    ///
    /// # Errors
    ///
    /// Fails with `HardwareUnavailable` when the port cannot be reached.
    fn set_interrupt_mask(&mut self, mask: u32) -> Result<(), Error>;

    /// Bind `handler` to the interrupt of the port.
    ///
    /// A previously registered handler gets replaced.
    ///
    /// # Errors
    ///
    /// Fails with `HardwareUnavailable` when the interrupt cannot be bound.
    fn register_handler(&mut self, handler: Handler<'a>) -> Result<(), Error>;

    /// Release the registered handler, if any.
    fn unregister_handler(&mut self);
}
