//! Quadrature rotary encoder

use tipctl_core::mode::InputEvent;

/// Valid Gray-code transitions, indexed by `(previous << 2) | current`
///
/// +1 clockwise, -1 counter-clockwise, 0 for no change or an invalid
/// (skipped) transition.
const TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Polled quadrature decoder
///
/// Accumulates transitions and emits one `Up`/`Down` per detent. Invalid
/// transitions from contact bounce are ignored.
#[derive(Debug, Clone)]
pub struct RotaryDecoder {
    state: u8,
    steps: i8,
    steps_per_detent: i8,
}

impl RotaryDecoder {
    /// Create a decoder from the initial pin levels
    pub fn new(a: bool, b: bool, steps_per_detent: i8) -> Self {
        Self {
            state: Self::encode(a, b),
            steps: 0,
            steps_per_detent: steps_per_detent.max(1),
        }
    }

    fn encode(a: bool, b: bool) -> u8 {
        (u8::from(a) << 1) | u8::from(b)
    }

    /// Feed one sample of both channels
    pub fn update(&mut self, a: bool, b: bool) -> Option<InputEvent> {
        let current = Self::encode(a, b);
        let index = usize::from((self.state << 2) | current);
        self.state = current;

        self.steps += TRANSITIONS[index];
        if self.steps >= self.steps_per_detent {
            self.steps = 0;
            Some(InputEvent::Up)
        } else if self.steps <= -self.steps_per_detent {
            self.steps = 0;
            Some(InputEvent::Down)
        } else {
            None
        }
    }
}
