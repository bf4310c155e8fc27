//! Frame hand-off between the control loop and the multiplexer task
//!
//! The loop encodes frames through `SegmentFrame<SharedFrame>`; the mux
//! task reads the cells on every scan. A scan may mix digits from two
//! frames for one pass, which is not visible.

use portable_atomic::{AtomicU8, Ordering};
use tipctl_drivers::display::FrameSink;

static FRAME: [AtomicU8; 3] = [AtomicU8::new(0), AtomicU8::new(0), AtomicU8::new(0)];

/// Sink that publishes frames to the multiplexer
pub struct SharedFrame;

impl FrameSink for SharedFrame {
    fn write_frame(&mut self, frame: [u8; 3]) {
        for (cell, segments) in FRAME.iter().zip(frame) {
            cell.store(segments, Ordering::Release);
        }
    }
}

/// Latest published frame
pub fn current() -> [u8; 3] {
    core::array::from_fn(|i| FRAME[i].load(Ordering::Acquire))
}
