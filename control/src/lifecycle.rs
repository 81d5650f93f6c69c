//! Arm the button port for a single test run and tear it down afterwards.

use crate::button_test::ButtonTest;
use crate::capture::{EdgeCapture, Handler};
use crate::error::Error;
use crate::log;
use crate::peripheral::InterruptControl;

/// Reset the store, enable interrupts of all `N` lines and bind the handler.
///
/// The returned test starts with nothing tested and no value observed. The
/// store stays borrowed by both the test and the registered handler, so it
/// cannot go away before `disarm` is called and the test dropped.
///
/// # Errors
///
/// Fails with `HardwareUnavailable` when the port cannot be configured. In
/// that case the port is left disarmed with no handler registered.
pub fn arm<'a, const N: usize>(
    control: &mut impl InterruptControl<'a>,
    capture: &'a EdgeCapture,
) -> Result<ButtonTest<'a, N>, Error> {
    capture.reset();
    capture.arm();

    let armed = control
        .set_interrupt_mask(ButtonTest::<N>::MASK)
        .and_then(|()| control.register_handler(Handler::new(capture)));
    if let Err(error) = armed {
        log::warning!("Failed to arm button port: {}", error);
        disarm(control, capture);
        return Err(error);
    }

    log::info!("Armed button port with mask={:#x}", ButtonTest::<N>::MASK);
    Ok(ButtonTest::new(capture))
}

/// Mask all lines and release the handler.
///
/// Safe to call repeatedly, or without any event fired. Interrupts slipping
/// through after this call find the store disarmed and leave it untouched.
pub fn disarm<'a>(control: &mut impl InterruptControl<'a>, capture: &EdgeCapture) {
    capture.disarm();
    if let Err(_error) = control.set_interrupt_mask(0) {
        log::warning!("Failed to mask button port: {}", _error);
    }
    control.unregister_handler();
    log::info!("Disarmed button port");
}
