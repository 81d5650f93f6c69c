//! Patterns of the two digit seven segment display.
//!
//! Segments are active low, a set bit keeps the segment dark. Each digit
//! takes seven bits, the lower digit sits in bits 0 to 6, the higher one in
//! bits 7 to 13.

/// Glyphs of hexadecimal digits, bit 0 is segment a, bit 6 is segment g.
const GLYPHS: [u8; 16] = [
    0x40, 0x79, 0x24, 0x30, 0x19, 0x12, 0x02, 0x78, 0x00, 0x18, // 0-9
    0x08, 0x03, 0x46, 0x21, 0x06, 0x0E, // a-f
];

const DIGIT_WIDTH: u32 = 7;

/// Display pattern with all segments off.
pub const BLANK: u32 = 0xFFFF;

/// Display pattern showing `value` as two hexadecimal digits.
#[must_use]
pub fn encode_hex(value: u8) -> u32 {
    let low = GLYPHS[usize::from(value & 0x0F)];
    let high = GLYPHS[usize::from(value >> 4)];
    u32::from(low) | u32::from(high) << DIGIT_WIDTH
}

/// Patterns counting from 0x00 up to 0xFF.
pub fn count() -> impl Iterator<Item = u32> {
    (0..=u8::MAX).map(encode_hex)
}

/// Segments individually toggled by the operator.
///
/// Lower case keys `a` to `g` address segments of the right digit, upper
/// case keys those of the left digit. Keys `h` and `H` toggle the dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments {
    bits: u32,
}

impl Default for Segments {
    fn default() -> Self {
        Self { bits: BLANK }
    }
}

impl Segments {
    /// Toggle the segment assigned to `key`, returning the new pattern.
    ///
    /// Keys without a segment leave the pattern as it is.
    pub fn toggle(&mut self, key: char) -> u32 {
        self.bits ^= segment_bit(key);
        self.bits
    }

    #[must_use]
    pub fn bits(&self) -> u32 {
        self.bits
    }
}

fn segment_bit(key: char) -> u32 {
    match key {
        'a'..='g' => 1 << ('g' as u32 - key as u32),
        'h' => 1 << 7,
        'A'..='G' => 1 << ('G' as u32 - key as u32 + 8),
        'H' => 1 << 15,
        _ => 0,
    }
}
