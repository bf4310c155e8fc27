//! Seven-segment display encoding

pub mod seven_segment;

pub use seven_segment::{encode_glyph, FrameSink, SegmentFrame, SEG_DP};
