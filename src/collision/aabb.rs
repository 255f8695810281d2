// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        // Ensure min coordinates are <= max coordinates
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Penetration depth on each axis, or `None` unless both axes overlap
    /// strictly. Boxes that only share an edge do not overlap.
    pub fn overlap_depth(&self, other: &AABB) -> Option<Vec2> {
        let depth_x = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let depth_y = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        if depth_x > 0.0 && depth_y > 0.0 {
            Some(Vec2::new(depth_x, depth_y))
        } else {
            None
        }
    }

    /// The overlapping region of two boxes, if any.
    pub fn intersection(&self, other: &AABB) -> Option<AABB> {
        self.overlap_depth(other)?;
        Some(AABB::new(
            Vec2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            Vec2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        ))
    }
}
