use crate::math::vec2::Vec2;

/// A circle placed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Inclusive containment: a point on the rim counts as inside.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains_point() {
        let c = Circle::new(Vec2::new(1.0, 1.0), 2.0);
        assert!(c.contains_point(Vec2::new(1.0, 1.0)));
        assert!(c.contains_point(Vec2::new(3.0, 1.0))); // on the rim
        assert!(!c.contains_point(Vec2::new(3.1, 1.0)));
    }
}
