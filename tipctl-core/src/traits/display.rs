//! Three-digit seven-segment display trait

/// Character that can be drawn in one display cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    Blank,
    Minus,
    Exclamation,
    A,
    B,
    D,
    E,
    F,
    H,
    I,
    N,
    O,
    P,
    R,
    S,
    T,
    /// Decimal digit 0-9 (larger values render blank)
    Digit(u8),
}

/// Three cells, leftmost first (position 2, 1, 0)
pub type Word = [Glyph; 3];

/// Display renderer
///
/// Positions are numbered right to left: `pos0` is the rightmost cell.
pub trait SegmentDisplay {
    /// Show a whole-degree temperature
    fn show_temperature(&mut self, value: i16);

    /// Show a fixed-point value, `scale` is the power of ten (-1 = tenths)
    fn show_fixed_point(&mut self, value: i16, scale: i8);

    /// Show three independent glyphs
    fn show_glyphs(&mut self, pos2: Glyph, pos1: Glyph, pos0: Glyph);

    /// Show a three-glyph word
    fn show_word(&mut self, word: Word) {
        let [pos2, pos1, pos0] = word;
        self.show_glyphs(pos2, pos1, pos0);
    }
}
