//! Pure geometric intersection tests. Nothing here knows about bodies.

use super::manifold::{Contact, PolygonHit};
use crate::error::{KernelError, KernelResult};
use crate::math::vec2::Vec2;
use crate::shapes::line_segment::EPSILON;
use crate::shapes::{polygon, Circle, LineSegment, SegmentIntersection};

/// Checks for overlap between two circles.
///
/// Compares squared distance against the squared radius sum, so the square
/// root is only taken on a hit. Touching circles (`d == r1 + r2`) do not
/// collide. Concentric circles have no usable normal and report `None`.
pub fn circle_circle_intersect(a: &Circle, b: &Circle) -> Option<Contact> {
    let dist_vec = b.center - a.center;
    let dist_sq = dist_vec.magnitude_squared();
    let radii_sum = a.radius + b.radius;

    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let normal = dist_vec.try_normalize(EPSILON)?;
    Some(Contact {
        normal,
        point: b.center - normal * b.radius,
    })
}

/// Finds where a segment touches a circle.
///
/// An endpoint inside the circle is returned immediately. Otherwise the
/// centre is projected onto the segment's line; a projection parameter
/// outside `[0, 1]` is a miss. A segment too short to project onto is an
/// error rather than a miss, since squares never produce one.
pub fn segment_circle_intersect(
    segment: &LineSegment,
    circle: &Circle,
) -> KernelResult<Option<Vec2>> {
    if circle.contains_point(segment.a) {
        return Ok(Some(segment.a));
    }
    if circle.contains_point(segment.b) {
        return Ok(Some(segment.b));
    }

    if segment.is_degenerate() {
        return Err(KernelError::DegenerateSegment {
            start: segment.a,
            end: segment.b,
        });
    }

    let direction = segment.direction();
    let length_sq = direction.magnitude_squared();

    let t = (circle.center - segment.a).dot(direction) / length_sq;
    if !(0.0..=1.0).contains(&t) {
        return Ok(None);
    }

    let closest = segment.a + direction * t;
    let dist_sq = closest.distance_squared(circle.center);
    if dist_sq - circle.radius * circle.radius < EPSILON {
        Ok(Some(closest))
    } else {
        Ok(None)
    }
}

/// Tests every polygon edge against the circle and returns the first touch.
///
/// Only the boundary is tested: a circle lying wholly inside the polygon
/// without reaching an edge is not reported.
pub fn polygon_circle_intersect(vertices: &[Vec2], circle: &Circle) -> KernelResult<Option<Vec2>> {
    for edge in polygon::edges(vertices) {
        if let Some(point) = segment_circle_intersect(&edge, circle)? {
            return Ok(Some(point));
        }
    }
    Ok(None)
}

/// Tests every edge of `a` against every edge of `b`.
///
/// Returns the first crossing point along with the edge of `a` it lies on.
/// Coincident (collinear, overlapping) edge pairs carry no point and are
/// skipped; polygons sharing an edge still meet where their neighbouring
/// edges cross. Containment without any crossing edges is not detected.
pub fn polygon_polygon_intersect(a: &[Vec2], b: &[Vec2]) -> Option<PolygonHit> {
    for edge_a in polygon::edges(a) {
        for edge_b in polygon::edges(b) {
            if let SegmentIntersection::Point(point) = edge_b.intersect(&edge_a) {
                return Some(PolygonHit {
                    point,
                    edge: edge_a,
                });
            }
        }
    }
    None
}
