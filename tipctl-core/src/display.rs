//! Display readouts and the fixed glyph words the firmware shows

use crate::traits::{Celsius, Glyph, SegmentDisplay, Word};

/// Boot greeting
pub const HELLO: Word = [Glyph::H, Glyph::I, Glyph::Exclamation];
/// Tip broken
pub const TIP: Word = [Glyph::T, Glyph::I, Glyph::P];
/// Battery low banner
pub const BAT: Word = [Glyph::B, Glyph::A, Glyph::T];

/// Fault trap frames: "Err trn OFF And On"
pub const ERR: Word = [Glyph::E, Glyph::R, Glyph::R];
pub const TRN: Word = [Glyph::T, Glyph::R, Glyph::N];
pub const OFF: Word = [Glyph::O, Glyph::F, Glyph::F];
pub const AND: Word = [Glyph::A, Glyph::N, Glyph::D];
pub const ON: Word = [Glyph::Blank, Glyph::O, Glyph::N];

/// Menu item labels
pub const DEF: Word = [Glyph::D, Glyph::E, Glyph::F];
pub const RST: Word = [Glyph::R, Glyph::S, Glyph::T];
pub const BATT: Word = [Glyph::B, Glyph::A, Glyph::T];
pub const END: Word = [Glyph::E, Glyph::N, Glyph::D];

/// What a display refresh should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Readout {
    /// Numeric temperature
    Temperature(Celsius),
    /// Battery voltage in decivolts, shown with one decimal
    Battery(u8),
    /// Fixed glyph word
    Word(Word),
}

impl Readout {
    /// Draw this readout
    pub fn render<D: SegmentDisplay>(&self, display: &mut D) {
        match *self {
            Readout::Temperature(value) => display.show_temperature(value),
            Readout::Battery(dv) => display.show_fixed_point(i16::from(dv), -1),
            Readout::Word(word) => display.show_word(word),
        }
    }
}
