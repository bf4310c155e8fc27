//! Seven-segment digit multiplexing
//!
//! Three digits share eight segment lines; one digit is lit at a time and
//! the scan has to run fast enough (> 50 Hz per digit) to look steady.

use embassy_rp::gpio::Output;

/// Multiplexed three-digit display on GPIO
///
/// Common cathode: segments active high, digit enables active low.
pub struct SegmentMux<'d> {
    segments: [Output<'d>; 8],
    digits: [Output<'d>; 3],
    active: usize,
}

impl<'d> SegmentMux<'d> {
    /// Take the pins with every digit off
    pub fn new(segments: [Output<'d>; 8], digits: [Output<'d>; 3]) -> Self {
        let mut mux = Self {
            segments,
            digits,
            active: 0,
        };
        for digit in mux.digits.iter_mut() {
            digit.set_high();
        }
        mux
    }

    /// Light the next digit of `frame` (index 0 = rightmost)
    pub fn scan(&mut self, frame: [u8; 3]) {
        self.digits[self.active].set_high();

        self.active = (self.active + 1) % self.digits.len();
        let pattern = frame[self.active];
        for (bit, segment) in self.segments.iter_mut().enumerate() {
            if pattern & (1 << bit) != 0 {
                segment.set_high();
            } else {
                segment.set_low();
            }
        }

        self.digits[self.active].set_low();
    }
}
