//! Traffic used to exercise the serial console.

use core::fmt::{self, Write};

pub const FLOOD_LINES: usize = 100;
pub const FLOOD_LINE_WIDTH: usize = 80;

const FIRST_PRINTABLE: u8 = b'!';
const LAST_PRINTABLE: u8 = b'~';

/// Block of text sent to the console in one go.
///
/// It consists of `FLOOD_LINES` lines, `FLOOD_LINE_WIDTH` characters each,
/// followed by an empty line. A space as the fill character selects a mix
/// cycling through all printable characters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flood {
    fill: u8,
    mix: bool,
    line: usize,
    column: usize,
}

impl Flood {
    #[must_use]
    pub fn new(fill: u8) -> Self {
        let fill = if fill < b' ' { b'.' } else { fill };
        let mix = fill == b' ';
        Self {
            fill,
            mix,
            line: 0,
            column: 0,
        }
    }

    fn next_fill(&mut self) -> u8 {
        if self.mix {
            self.fill = if self.fill >= LAST_PRINTABLE {
                FIRST_PRINTABLE
            } else {
                self.fill + 1
            };
        }
        self.fill
    }
}

impl Iterator for Flood {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.line > FLOOD_LINES {
            return None;
        }
        if self.line == FLOOD_LINES || self.column == FLOOD_LINE_WIDTH {
            self.line += 1;
            self.column = 0;
            return Some(b'\n');
        }
        self.column += 1;
        Some(self.next_fill())
    }
}

/// Describe a received byte the way the echo test shows it.
///
/// # Errors
///
/// Passes through any error of the writer.
pub fn write_echo(writer: &mut impl Write, byte: u8) -> fmt::Result {
    let shown = if (b' '..=0x7F).contains(&byte) {
        char::from(byte)
    } else {
        '.'
    };
    writeln!(writer, "'{shown}' 0x{byte:02x} {byte}")
}
