//! Buttons SW0 to SW3, each wired to its own EXTI line.
//!
//! Lines of the control crate are numbered by buttons, while the EXTI
//! registers are indexed by pin numbers. All translation between the two
//! happens here.

use board_diag_control::{Delivery, EdgeCaptureRegister, Error, Handler, InterruptControl};

use crate::system::hal::gpio::{self, Edge, ExtiPin};
use crate::system::hal::pac::{EXTI, SYSCFG};

pub struct Buttons {
    pins: Pins,
    port: Port,
    handler: Option<Handler<'static>>,
}

pub struct Config {
    pub pins: Pins,
    pub exti: EXTI,
}

pub struct Pins {
    pub button_0: Button0Pin,
    pub button_1: Button1Pin,
    pub button_2: Button2Pin,
    pub button_3: Button3Pin,
}

pub type Button0Pin = gpio::gpiob::PB8<gpio::Input>;
pub type Button1Pin = gpio::gpiob::PB9<gpio::Input>;
pub type Button2Pin = gpio::gpioc::PC13<gpio::Input>;
pub type Button3Pin = gpio::gpiog::PG14<gpio::Input>;

/// EXTI line of each button, ordered by buttons.
const EXTI_LINES: [u32; 4] = [8, 9, 13, 14];

impl Buttons {
    /// Route all buttons to EXTI, triggering on press, with interrupts
    /// masked until armed.
    #[must_use]
    pub fn new(mut config: Config, syscfg: &mut SYSCFG) -> Self {
        let pins = &mut config.pins;
        pins.button_0.make_interrupt_source(syscfg);
        pins.button_0.trigger_on_edge(&mut config.exti, Edge::Falling);
        pins.button_1.make_interrupt_source(syscfg);
        pins.button_1.trigger_on_edge(&mut config.exti, Edge::Falling);
        pins.button_2.make_interrupt_source(syscfg);
        pins.button_2.trigger_on_edge(&mut config.exti, Edge::Falling);
        pins.button_3.make_interrupt_source(syscfg);
        pins.button_3.trigger_on_edge(&mut config.exti, Edge::Falling);

        let mut port = Port { exti: config.exti };
        port.write_mask(0);
        port.clear_edge_capture();

        Self {
            pins: config.pins,
            port,
            handler: None,
        }
    }

    /// Serve the EXTI interrupt of any of the buttons.
    ///
    /// Without a registered handler, latched edges are only cleared so the
    /// interrupt does not fire again.
    pub fn interrupt(&mut self) -> Option<Delivery> {
        if let Some(handler) = self.handler {
            Some(handler.handle(&mut self.port))
        } else {
            self.port.clear_edge_capture();
            None
        }
    }

    /// Whether an unmasked button latched an edge not served yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        let pending = self.port.exti.cpupr1.read().bits();
        let unmasked = self.port.exti.cpuimr1.read().bits();
        pending & unmasked & exti_bits(0xF) != 0
    }

    /// Current level of buttons, a pressed one reads as true.
    #[must_use]
    pub fn pressed(&self) -> [bool; 4] {
        [
            self.pins.button_0.is_low(),
            self.pins.button_1.is_low(),
            self.pins.button_2.is_low(),
            self.pins.button_3.is_low(),
        ]
    }

    /// Pressed buttons as a mask, bit 0 being SW0.
    #[must_use]
    pub fn pressed_lines(&self) -> u32 {
        self.pressed()
            .iter()
            .enumerate()
            .filter(|(_, pressed)| **pressed)
            .fold(0, |lines, (i, _)| lines | 1 << i)
    }
}

impl InterruptControl<'static> for Buttons {
    fn set_interrupt_mask(&mut self, mask: u32) -> Result<(), Error> {
        if mask & !0xF != 0 {
            return Err(Error::HardwareUnavailable);
        }
        self.port.write_mask(mask);
        Ok(())
    }

    fn register_handler(&mut self, handler: Handler<'static>) -> Result<(), Error> {
        // Edges latched while disarmed belong to no run.
        self.port.clear_edge_capture();
        self.handler = Some(handler);
        Ok(())
    }

    fn unregister_handler(&mut self) {
        self.handler = None;
    }
}

struct Port {
    exti: EXTI,
}

impl Port {
    fn write_mask(&mut self, mask: u32) {
        let unmasked = exti_bits(mask);
        self.exti.cpuimr1.modify(|r, w| unsafe {
            w.bits(r.bits() & !exti_bits(0xF) | unmasked)
        });
    }
}

impl EdgeCaptureRegister for Port {
    fn read_edge_capture(&mut self) -> u32 {
        line_bits(self.exti.cpupr1.read().bits())
    }

    fn clear_edge_capture(&mut self) {
        // Pending bits are cleared by writing ones.
        self.exti.cpupr1.write(|w| unsafe { w.bits(exti_bits(0xF)) });
    }
}

fn exti_bits(lines: u32) -> u32 {
    EXTI_LINES
        .iter()
        .enumerate()
        .filter(|(i, _)| lines & (1 << i) != 0)
        .fold(0, |bits, (_, exti_line)| bits | 1 << exti_line)
}

fn line_bits(exti: u32) -> u32 {
    EXTI_LINES
        .iter()
        .enumerate()
        .filter(|(_, exti_line)| exti & (1 << **exti_line) != 0)
        .fold(0, |bits, (i, _)| bits | 1 << i)
}
