use crate::math::vec2::Vec2;

/// Threshold under which a determinant or squared length counts as zero.
pub const EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub a: Vec2,
    pub b: Vec2,
}

/// Outcome of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments cross at a single point.
    Point(Vec2),
    /// No shared point, including parallel segments that do not overlap.
    None,
    /// Parallel and (approximately) overlapping. No point is computed.
    Coincident,
}

impl SegmentIntersection {
    pub fn point(self) -> Option<Vec2> {
        match self {
            SegmentIntersection::Point(p) => Some(p),
            _ => None,
        }
    }
}

impl LineSegment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Calculates the squared length of the line segment.
    pub fn length_squared(&self) -> f64 {
        self.a.distance_squared(self.b)
    }

    /// Returns the direction vector of the line segment (from a to b).
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    pub fn is_degenerate(&self) -> bool {
        self.length_squared() < EPSILON
    }

    /// Intersects two segments with Cramer's rule on their parametric forms.
    ///
    /// `self` is `a + t(b - a)` and `other` is `c + u(d - c)`; a point is
    /// reported only when both `t` and `u` lie in `[0, 1]`. When the system's
    /// determinant is near zero the segments are parallel, and overlapping is
    /// told apart from disjoint by comparing the sums of their minimum
    /// coordinates. That comparison is approximate: it flags collinear
    /// segments that share a min corner, not every overlapping pair.
    pub fn intersect(&self, other: &LineSegment) -> SegmentIntersection {
        let (x1, y1, x2, y2) = (self.a.x, self.a.y, self.b.x, self.b.y);
        let (x3, y3, x4, y4) = (other.a.x, other.a.y, other.b.x, other.b.y);

        let det = (x2 - x1) * (y3 - y4) - (x3 - x4) * (y2 - y1);
        if det.abs() < EPSILON {
            let min_offset = (x1.min(x2) - x3.min(x4)) + (y1.min(y2) - y3.min(y4));
            return if min_offset.abs() < EPSILON {
                SegmentIntersection::Coincident
            } else {
                SegmentIntersection::None
            };
        }

        let det_t = (x3 - x1) * (y3 - y4) - (x3 - x4) * (y3 - y1);
        let det_u = (x2 - x1) * (y3 - y1) - (x3 - x1) * (y2 - y1);
        let t = det_t / det;
        let u = det_u / det;

        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return SegmentIntersection::None;
        }

        SegmentIntersection::Point(self.a + self.direction() * t)
    }
}
