use core::fmt;

/// Failure of the button port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The peripheral could not be reached, e.g. it is missing on the board.
    HardwareUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardwareUnavailable => write!(f, "button peripheral is unavailable"),
        }
    }
}
