//! Error type shared by every fallible kernel operation.

use crate::math::Vec2;

/// Failures surfaced by the collision kernel.
///
/// Ordinary misses (no overlap, parallel segments, coincident centres) are
/// never errors; they come back as `None`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("body size must be positive and finite, got {size}")]
    InvalidSize { size: f64 },

    #[error("body mass must be positive and finite, got {mass}")]
    InvalidMass { mass: f64 },

    /// The segment/circle projection would divide by a zero-length segment.
    #[error("degenerate segment from {start:?} to {end:?} in circle projection")]
    DegenerateSegment { start: Vec2, end: Vec2 },

    #[error("body index {index} out of range (count={count})")]
    BodyIndexOutOfRange { index: usize, count: usize },
}

pub type KernelResult<T> = Result<T, KernelError>;
