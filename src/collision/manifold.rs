use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;

/// Result of a successful narrow-phase test between body A and body B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// World-space contact location.
    pub point: Vec2,
}

impl Contact {
    /// The same contact seen from the other body.
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            point: self.point,
        }
    }
}

/// First edge crossing found between two polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonHit {
    pub point: Vec2,
    /// The edge of the first polygon that produced the crossing.
    pub edge: LineSegment,
}
