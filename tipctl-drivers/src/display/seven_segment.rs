//! Three-digit seven-segment encoding
//!
//! Segment bits: a = bit 0 through g = bit 6, decimal point = bit 7.
//! Frame index 0 is the rightmost digit.

use tipctl_core::traits::{Glyph, SegmentDisplay};

/// Decimal point segment
pub const SEG_DP: u8 = 0x80;

const SEG_MINUS: u8 = 0x40;

const DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Shown when a value does not fit in three digits
const OVERFLOW: [u8; 3] = [SEG_MINUS; 3];

/// Segment pattern for a glyph
pub fn encode_glyph(glyph: Glyph) -> u8 {
    match glyph {
        Glyph::Blank => 0x00,
        Glyph::Minus => SEG_MINUS,
        Glyph::Exclamation => 0x02 | SEG_DP,
        Glyph::A => 0x77,
        Glyph::B => 0x7C,
        Glyph::D => 0x5E,
        Glyph::E => 0x79,
        Glyph::F => 0x71,
        Glyph::H => 0x76,
        Glyph::I => 0x06,
        Glyph::N => 0x54,
        Glyph::O => 0x3F,
        Glyph::P => 0x73,
        Glyph::R => 0x50,
        Glyph::S => 0x6D,
        Glyph::T => 0x78,
        Glyph::Digit(d) => DIGITS.get(usize::from(d)).copied().unwrap_or(0),
    }
}

/// Encode a number with `decimals` digits after the decimal point
///
/// Leading zeros are blanked up to the digit left of the decimal point.
fn encode_number(value: i16, decimals: usize) -> [u8; 3] {
    let magnitude = value.unsigned_abs();
    if magnitude > 999 {
        return OVERFLOW;
    }

    let mut frame = [0u8; 3];
    let mut used = 0;
    let mut scale = 1u16;
    for (pos, segments) in frame.iter_mut().enumerate() {
        if pos == 0 || pos <= decimals || magnitude >= scale {
            *segments = DIGITS[usize::from(magnitude / scale % 10)];
            used = pos + 1;
        }
        scale = scale.saturating_mul(10);
    }

    if decimals > 0 {
        frame[decimals] |= SEG_DP;
    }
    if value < 0 {
        match frame.get_mut(used) {
            Some(segments) => *segments = SEG_MINUS,
            None => return OVERFLOW,
        }
    }
    frame
}

/// Where encoded frames go (multiplexer, shift register)
pub trait FrameSink {
    /// Latch a new frame
    fn write_frame(&mut self, frame: [u8; 3]);
}

/// `SegmentDisplay` that encodes into segment bytes
pub struct SegmentFrame<S> {
    sink: S,
    frame: [u8; 3],
}

impl<S: FrameSink> SegmentFrame<S> {
    /// Create a display, blanking it
    pub fn new(mut sink: S) -> Self {
        sink.write_frame([0; 3]);
        Self {
            sink,
            frame: [0; 3],
        }
    }

    /// Last frame written
    pub fn frame(&self) -> [u8; 3] {
        self.frame
    }

    fn write(&mut self, frame: [u8; 3]) {
        self.frame = frame;
        self.sink.write_frame(frame);
    }
}

impl<S: FrameSink> SegmentDisplay for SegmentFrame<S> {
    fn show_temperature(&mut self, value: i16) {
        self.write(encode_number(value, 0));
    }

    fn show_fixed_point(&mut self, value: i16, scale: i8) {
        let decimals = usize::from(scale.saturating_neg().clamp(0, 2) as u8);
        self.write(encode_number(value, decimals));
    }

    fn show_glyphs(&mut self, pos2: Glyph, pos1: Glyph, pos0: Glyph) {
        self.write([encode_glyph(pos0), encode_glyph(pos1), encode_glyph(pos2)]);
    }
}
