//! Polled input devices
//!
//! Buttons and the rotary encoder are sampled from the loop's housekeeping
//! and turned into `InputEvent`s, which wait in an `InputQueue` until the
//! next control step drains them.

pub mod button;
pub mod rotary;

pub use button::ButtonDebouncer;
pub use rotary::RotaryDecoder;

use heapless::Deque;
use tipctl_core::mode::InputEvent;

/// Pending events between two control steps
pub const INPUT_QUEUE_LEN: usize = 8;

/// Bounded FIFO of input events
///
/// When full, new events are dropped; a user pressing faster than the
/// loop runs loses presses, never the ones already queued.
#[derive(Default)]
pub struct InputQueue {
    events: Deque<InputEvent, INPUT_QUEUE_LEN>,
    dropped: u32,
}

impl InputQueue {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Queue an event
    pub fn push(&mut self, event: InputEvent) {
        if self.events.push_back(event).is_err() {
            self.dropped = self.dropped.wrapping_add(1);
        }
    }

    /// Take all queued events in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        core::iter::from_fn(move || self.events.pop_front())
    }

    /// Number of events lost to a full queue
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
