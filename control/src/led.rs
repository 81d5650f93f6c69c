//! Patterns shown on the row of eight LEDs.

pub const ALL_ON: u8 = 0xFF;
pub const ALL_OFF: u8 = 0x00;

/// Expand a pattern into states of individual LEDs, LED 1 being bit 0.
#[must_use]
pub fn states(pattern: u8) -> [bool; 8] {
    let mut states = [false; 8];
    for (i, state) in states.iter_mut().enumerate() {
        *state = pattern & (1 << i) != 0;
    }
    states
}

/// The classic walking LED, bouncing from one end of the row to the other.
///
/// Call `tick` on every step, read `pattern` to get the LED to light.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Walk {
    position: u8,
    backwards: bool,
}

impl Walk {
    pub fn tick(&mut self) {
        if self.backwards {
            if self.position == 0 {
                self.backwards = false;
                self.position = 1;
            } else {
                self.position -= 1;
            }
        } else if self.position == 7 {
            self.backwards = true;
            self.position = 6;
        } else {
            self.position += 1;
        }
    }

    #[must_use]
    pub fn pattern(&self) -> u8 {
        1 << self.position
    }
}
