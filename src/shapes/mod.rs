pub mod circle;
pub mod line_segment;
pub mod polygon;

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub use circle::Circle;
pub use line_segment::{LineSegment, SegmentIntersection};

/// The two body shapes the playground supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// `size` is the diameter.
    Circle,
    /// `size` is the side length.
    Square,
}

impl ShapeKind {
    /// Mass of a unit-density body of this shape: its area.
    pub fn default_mass(self, size: f64) -> f64 {
        match self {
            ShapeKind::Circle => PI * (size / 2.0).powi(2),
            ShapeKind::Square => size * size,
        }
    }
}
