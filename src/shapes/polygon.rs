use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;

/// Iterates the closed edge loop of a vertex ring: `v0->v1, ..., vn->v0`.
pub fn edges(vertices: &[Vec2]) -> impl Iterator<Item = LineSegment> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| LineSegment::new(vertices[i], vertices[(i + 1) % n]))
}

/// Corners of a square of side `size` centred on `center`, rotated by
/// `angle_degrees` about the centre.
///
/// Corner order is `(+h,-h), (-h,-h), (-h,+h), (+h,+h)` before rotation.
/// When the angle is a whole number of turns the axis-aligned corners are
/// returned as-is, without any trigonometry.
pub fn square_vertices(center: Vec2, size: f64, angle_degrees: f64) -> [Vec2; 4] {
    let h = size / 2.0;
    let corners = [
        Vec2::new(center.x + h, center.y - h),
        Vec2::new(center.x - h, center.y - h),
        Vec2::new(center.x - h, center.y + h),
        Vec2::new(center.x + h, center.y + h),
    ];
    if angle_degrees % 360.0 == 0.0 {
        return corners;
    }
    let radians = angle_degrees.to_radians();
    corners.map(|corner| corner.rotate_about(radians, center))
}

/// Point-in-convex-polygon test. Works for either winding; points on an edge
/// count as inside.
pub fn contains_point(vertices: &[Vec2], point: Vec2) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut sign = 0.0_f64;
    for edge in edges(vertices) {
        let side = edge.direction().cross(point - edge.a);
        if side == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = side.signum();
        } else if side.signum() != sign {
            return false;
        }
    }
    true
}
