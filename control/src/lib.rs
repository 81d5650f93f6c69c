//! Logic of the board diagnostics, passing raw peripheral events to tests
//! and their verdicts back to the operator.
//!
//! It is mainly targetted to run in a firmware with an interrupt-driven
//! button port and a foreground loop polling it. However, all of it can be
//! exercised in software as well, registers being replaced by fakes.
//!
//! Following is the flow of the button test:
//!
//! ```text
//!      [ Button port ]
//!            |
//!            | (edge capture register)
//!            V
//!    [ Interrupt handler ] ---(write)---> {EdgeCapture}
//!            A                                 |
//!            | (register / unregister)         | (read)
//!            |                                 V
//!     [ Lifecycle ] ---(arm)---------> [ ButtonTest ] ---> [ Report ]
//!                   <--(disarm)-----------------+
//! ```
//!
//! The rest of the crate holds the operator-facing pieces: menus, the
//! seven segment encoder, serial test patterns, LED patterns and the LED
//! showcase driven by held buttons.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

mod log;

pub mod capture;
pub mod error;
pub mod led;
pub mod lifecycle;
pub mod menu;
pub mod peripheral;
pub mod report;
pub mod serial;
pub mod seven_segment;
pub mod showcase;

#[cfg(test)]
mod fake;

pub use button_test::{ButtonTest, Line, Poll, State};
pub use capture::{Delivery, EdgeCapture, Handler};
pub use error::Error;
pub use lifecycle::{arm, disarm};
pub use peripheral::{EdgeCaptureRegister, InterruptControl};
pub use report::{Report, TextReport};
