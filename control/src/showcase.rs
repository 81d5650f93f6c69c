//! LED shows switched between by holding buttons.

use core::fmt::{self, Write};

use crate::led::{Walk, ALL_OFF};

/// Show requested by the buttons held at the moment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Nothing or an unassigned combination is held.
    #[default]
    Idle,
    /// SW0 alone, a single LED sweeping back and forth.
    Sweep,
    /// SW1 alone, LEDs counting in binary.
    Count,
    /// SW3 alone.
    Exit,
}

impl Mode {
    /// Pick the show for `pressed` lines, bit 0 being SW0.
    #[must_use]
    pub fn from_pressed(pressed: u32) -> Self {
        match pressed {
            0x1 => Self::Sweep,
            0x2 => Self::Count,
            0x8 => Self::Exit,
            _ => Self::Idle,
        }
    }
}

/// Where the binary count stops. It does not fit eight LEDs, so it shows
/// as all off.
pub const COUNT_END: u16 = 256;

/// Drives the LEDs by whichever show is held.
///
/// Changing the show restarts it from scratch.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Showcase {
    mode: Mode,
    walk: Walk,
    count: u16,
}

impl Showcase {
    /// Advance by one step with `pressed` lines held.
    ///
    /// Returns the LED pattern to show, or `None` once exit was requested.
    pub fn step(&mut self, pressed: u32) -> Option<u8> {
        let mode = Mode::from_pressed(pressed);
        if mode != self.mode {
            self.mode = mode;
            self.walk = Walk::default();
            self.count = 0;
        }

        let pattern = match mode {
            Mode::Exit => return None,
            Mode::Idle => ALL_OFF,
            Mode::Sweep => {
                let pattern = self.walk.pattern();
                self.walk.tick();
                pattern
            }
            Mode::Count => {
                if self.count < COUNT_END {
                    self.count += 1;
                }
                // The end wraps to zero.
                self.count as u8
            }
        };
        Some(pattern)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// # Errors
///
/// Passes through any error of the writer.
pub fn write_instructions(writer: &mut impl Write) -> fmt::Result {
    write!(
        writer,
        "\n Hold SW0. A single LED sweeps from one end to the other and back\n\
         \n Hold SW1. The LEDs count from 1 to 256\n\
         \n Press SW3 to exit this test.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::{String, Vec};

    #[test]
    fn when_single_assigned_button_is_held_its_show_is_selected() {
        assert_eq!(Mode::from_pressed(0x1), Mode::Sweep);
        assert_eq!(Mode::from_pressed(0x2), Mode::Count);
        assert_eq!(Mode::from_pressed(0x8), Mode::Exit);
    }

    #[test]
    fn when_nothing_or_a_combination_is_held_it_idles() {
        assert_eq!(Mode::from_pressed(0x0), Mode::Idle);
        assert_eq!(Mode::from_pressed(0x4), Mode::Idle);
        assert_eq!(Mode::from_pressed(0x3), Mode::Idle);
        assert_eq!(Mode::from_pressed(0x9), Mode::Idle);
    }

    #[test]
    fn when_idle_all_leds_are_off() {
        let mut showcase = Showcase::default();
        assert_eq!(showcase.step(0x0), Some(ALL_OFF));
        assert_eq!(showcase.mode(), Mode::Idle);
    }

    #[test]
    fn when_sweep_is_held_a_single_led_bounces() {
        let mut showcase = Showcase::default();
        let patterns: Vec<u8, 10> = (0..10).map(|_| showcase.step(0x1).unwrap()).collect();
        assert_eq!(
            patterns.as_slice(),
            &[0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x40, 0x20]
        );
    }

    #[test]
    fn when_count_is_held_leds_count_up_and_end_dark() {
        let mut showcase = Showcase::default();
        assert_eq!(showcase.step(0x2), Some(1));
        assert_eq!(showcase.step(0x2), Some(2));
        assert_eq!(showcase.step(0x2), Some(3));
        for _ in 3..254 {
            showcase.step(0x2);
        }
        assert_eq!(showcase.step(0x2), Some(0xFF));
        assert_eq!(showcase.step(0x2), Some(0));
        assert_eq!(showcase.step(0x2), Some(0));
    }

    #[test]
    fn when_show_is_released_and_held_again_it_restarts() {
        let mut showcase = Showcase::default();
        showcase.step(0x2);
        showcase.step(0x2);
        assert_eq!(showcase.step(0x0), Some(ALL_OFF));
        assert_eq!(showcase.step(0x2), Some(1));

        showcase.step(0x1);
        showcase.step(0x1);
        showcase.step(0x2);
        assert_eq!(showcase.step(0x1), Some(0x01));
    }

    #[test]
    fn when_exit_is_pressed_no_pattern_is_returned() {
        let mut showcase = Showcase::default();
        showcase.step(0x1);
        assert_eq!(showcase.step(0x8), None);
        assert_eq!(showcase.mode(), Mode::Exit);
    }

    #[test]
    fn instructions_name_every_assigned_button() {
        let mut text = String::<256>::new();
        write_instructions(&mut text).unwrap();
        assert!(text.contains("Hold SW0."));
        assert!(text.contains("Hold SW1."));
        assert!(text.ends_with("\n Press SW3 to exit this test.\n"));
    }
}
