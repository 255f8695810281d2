//! Picks the geometry test for a pair of bodies and builds its contact.
//!
//! Every normal is taken from the centre-to-centre direction, except the
//! axis-aligned square case which uses the axis of least overlap. Normals
//! always point from the first body towards the second.

use super::aabb::AABB;
use super::detection::{circle_circle_intersect, polygon_circle_intersect, polygon_polygon_intersect};
use super::manifold::Contact;
use crate::error::KernelResult;
use crate::math::vec2::Vec2;
use crate::objects::Body;
use crate::shapes::line_segment::EPSILON;
use crate::shapes::ShapeKind;

/// Narrow-phase test between `a` and `b`.
///
/// Returns `Ok(None)` for no contact. The only error is a degenerate square
/// edge reaching the circle projection.
pub fn check_collision(a: &Body, b: &Body) -> KernelResult<Option<Contact>> {
    match (a.kind, b.kind) {
        (ShapeKind::Circle, ShapeKind::Circle) => {
            Ok(circle_circle_intersect(&a.bounding_circle(), &b.bounding_circle()))
        }
        (ShapeKind::Square, ShapeKind::Square) => Ok(check_square_square(a, b)),
        (ShapeKind::Square, ShapeKind::Circle) => check_square_circle(a, b),
        (ShapeKind::Circle, ShapeKind::Square) => {
            Ok(check_square_circle(b, a)?.map(Contact::flipped))
        }
    }
}

fn check_square_square(a: &Body, b: &Body) -> Option<Contact> {
    if a.is_rotated() || b.is_rotated() {
        let hit = polygon_polygon_intersect(&a.vertices(), &b.vertices())?;
        let normal = (b.position - a.position).try_normalize(EPSILON)?;
        return Some(Contact {
            normal,
            point: hit.point,
        });
    }

    let reach = a.half_size() + b.half_size();
    let distance_x = (a.position.x - b.position.x).abs();
    let distance_y = (a.position.y - b.position.y).abs();
    if distance_x >= reach || distance_y >= reach {
        return None;
    }

    let overlap_x = reach - distance_x;
    let overlap_y = reach - distance_y;
    let normal = if overlap_x < overlap_y {
        Vec2::new(if a.position.x < b.position.x { 1.0 } else { -1.0 }, 0.0)
    } else {
        Vec2::new(0.0, if a.position.y < b.position.y { 1.0 } else { -1.0 })
    };

    let point = overlap_center(&a.calculate_aabb(), &b.calculate_aabb());
    Some(Contact { normal, point })
}

/// Centre of the shared region of two overlapping boxes.
fn overlap_center(a: &AABB, b: &AABB) -> Vec2 {
    match a.intersection(b) {
        Some(region) => region.center(),
        None => (a.center() + b.center()) / 2.0,
    }
}

/// Square first, circle second; the normal points from square to circle.
fn check_square_circle(square: &Body, circle: &Body) -> KernelResult<Option<Contact>> {
    let Some(point) = polygon_circle_intersect(&square.vertices(), &circle.bounding_circle())?
    else {
        return Ok(None);
    };
    Ok((circle.position - square.position)
        .try_normalize(EPSILON)
        .map(|normal| Contact { normal, point }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, SQRT_2};

    fn circle(size: f64, x: f64, y: f64) -> Body {
        Body::circle(size, Vec2::new(x, y), Vec2::ZERO, 1.0).unwrap()
    }

    fn square(size: f64, x: f64, y: f64, angle: f64) -> Body {
        Body::square(size, Vec2::new(x, y), Vec2::ZERO, 1.0, angle).unwrap()
    }

    fn assert_vec_near(actual: Vec2, expected: Vec2) {
        assert!(
            actual.distance(expected) < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_circle_circle_dispatch() {
        let a = Body::circle(20.0, Vec2::new(100.0, 100.0), Vec2::ZERO, PI * 100.0).unwrap();
        let b = Body::circle(20.0, Vec2::new(115.0, 100.0), Vec2::ZERO, PI * 100.0).unwrap();
        let contact = check_collision(&a, &b).unwrap().unwrap();
        assert_vec_near(contact.normal, Vec2::new(1.0, 0.0));
        assert_vec_near(contact.point, Vec2::new(105.0, 100.0));

        let far = circle(20.0, 120.0, 100.0);
        assert_eq!(check_collision(&a, &far), Ok(None));
    }

    #[test]
    fn test_axis_aligned_squares_pick_least_overlap_axis() {
        // Overlap 2 in x, 8 in y: separate along x
        let a = square(10.0, 0.0, 0.0, 0.0);
        let b = square(10.0, 8.0, 2.0, 0.0);
        let contact = check_collision(&a, &b).unwrap().unwrap();
        assert_eq!(contact.normal, Vec2::new(1.0, 0.0));
        assert_vec_near(contact.point, Vec2::new(4.0, 1.0));

        let reversed = check_collision(&b, &a).unwrap().unwrap();
        assert_eq!(reversed.normal, Vec2::new(-1.0, 0.0));

        // Overlap 9 in x, 3 in y, B above A on screen
        let c = square(10.0, 1.0, -7.0, 0.0);
        let contact = check_collision(&a, &c).unwrap().unwrap();
        assert_eq!(contact.normal, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_axis_aligned_squares_touching_do_not_collide() {
        let a = square(10.0, 0.0, 0.0, 0.0);
        let b = square(10.0, 10.0, 0.0, 0.0);
        assert_eq!(check_collision(&a, &b), Ok(None));
    }

    #[test]
    fn test_rotated_squares_use_centre_line_normal() {
        let a = square(10.0, 0.0, 0.0, 0.0);
        let b = square(10.0, 8.0, 6.0, 45.0);
        let contact = check_collision(&a, &b).unwrap().unwrap();
        assert_vec_near(contact.normal, Vec2::new(0.8, 0.6));

        let far = square(10.0, 30.0, 0.0, 45.0);
        assert_eq!(check_collision(&a, &far), Ok(None));
    }

    #[test]
    fn test_full_turn_counts_as_unrotated() {
        let a = square(10.0, 0.0, 0.0, 0.0);
        let mut b = square(10.0, 8.0, 2.0, 0.0);
        b.angle = 720.0;
        let contact = check_collision(&a, &b).unwrap().unwrap();
        assert_eq!(contact.normal, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_unrotated_square_circle_uses_vertex_edges() {
        let sq = square(10.0, 0.0, 0.0, 0.0);
        let c = circle(4.0, 6.5, 0.0);
        let contact = check_collision(&sq, &c).unwrap().unwrap();
        assert_vec_near(contact.normal, Vec2::new(1.0, 0.0));
        assert_vec_near(contact.point, Vec2::new(5.0, 0.0));

        let clear = circle(4.0, 7.5, 0.0);
        assert_eq!(check_collision(&sq, &clear), Ok(None));
    }

    #[test]
    fn test_rotated_square_circle_tangent_to_rotated_edge() {
        let d = 55.0 / SQRT_2;
        let sq = square(100.0, 0.0, 0.0, 45.0);
        let c = circle(20.0, d, d);
        let contact = check_collision(&sq, &c).unwrap().unwrap();
        assert_vec_near(contact.normal, Vec2::new(1.0 / SQRT_2, 1.0 / SQRT_2));
    }

    #[test]
    fn test_circle_square_order_inverts_normal() {
        let sq = square(10.0, 0.0, 0.0, 30.0);
        let c = circle(6.0, 0.0, 7.0);

        let square_first = check_collision(&sq, &c).unwrap().unwrap();
        let circle_first = check_collision(&c, &sq).unwrap().unwrap();

        assert_vec_near(square_first.normal, Vec2::new(0.0, 1.0));
        assert_vec_near(circle_first.normal, Vec2::new(0.0, -1.0));
        assert_vec_near(circle_first.point, square_first.point);
    }

    #[test]
    fn test_concentric_square_and_circle_have_no_normal() {
        // Circle centred on the square and big enough to cross its edges
        let sq = square(10.0, 0.0, 0.0, 0.0);
        let c = circle(12.0, 0.0, 0.0);
        assert_eq!(check_collision(&sq, &c), Ok(None));
    }
}
