//! Debounced push button

/// Consecutive identical samples before a level is accepted
pub const DEFAULT_STABLE_SAMPLES: u8 = 4;

/// Counter-based debouncer for one button
///
/// Reports a press once, on the accepted released-to-pressed edge.
#[derive(Debug, Clone)]
pub struct ButtonDebouncer {
    pressed: bool,
    count: u8,
    threshold: u8,
}

impl Default for ButtonDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_STABLE_SAMPLES)
    }
}

impl ButtonDebouncer {
    /// Create a debouncer, assuming the button starts released
    pub const fn new(threshold: u8) -> Self {
        Self {
            pressed: false,
            count: 0,
            threshold,
        }
    }

    /// Feed one sample; returns `true` on an accepted press
    pub fn update(&mut self, pressed: bool) -> bool {
        if pressed == self.pressed {
            self.count = 0;
            return false;
        }

        self.count = self.count.saturating_add(1);
        if self.count < self.threshold {
            return false;
        }

        self.pressed = pressed;
        self.count = 0;
        pressed
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_reported_once() {
        let mut button = ButtonDebouncer::new(3);
        assert!(!button.update(true));
        assert!(!button.update(true));
        assert!(button.update(true));

        // Held: no repeats
        for _ in 0..10 {
            assert!(!button.update(true));
        }
        assert!(button.is_pressed());
    }

    #[test]
    fn test_bounce_rejected() {
        let mut button = ButtonDebouncer::new(3);
        for _ in 0..20 {
            assert!(!button.update(true));
            assert!(!button.update(false));
        }
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_release_not_reported() {
        let mut button = ButtonDebouncer::new(2);
        button.update(true);
        assert!(button.update(true));

        assert!(!button.update(false));
        assert!(!button.update(false));
        assert!(!button.is_pressed());
    }

    fn level_after_burst(samples: &[bool]) -> bool {
        let mut button = ButtonDebouncer::default();
        for &pressed in samples {
            button.update(pressed);
        }
        button.is_pressed()
    }

    #[test]
    fn test_burst_ignores_unsettled_first_sample() {
        // Line still low from reset, then pulled up
        let samples = [true, false, false, false, false, false, false, false];
        assert!(!level_after_burst(&samples));

        let samples = [true, true, false, false, false, false, false, false];
        assert!(!level_after_burst(&samples));
    }

    #[test]
    fn test_burst_detects_held_button() {
        assert!(level_after_burst(&[true; 8]));

        // A single blip after acceptance does not release it
        let samples = [true, true, true, true, false, true, true, true];
        assert!(level_after_burst(&samples));
    }
}
