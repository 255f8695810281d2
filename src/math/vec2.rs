use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a per-tick velocity from a speed and a heading in degrees.
    /// Headings are measured counter-clockwise on screen, so with y pointing
    /// down the y component is negated.
    pub fn from_speed_heading(speed: f64, heading_degrees: f64) -> Self {
        let radians = heading_degrees.to_radians();
        Self::new(speed * radians.cos(), -speed * radians.sin())
    }

    /// Inverse of [`Vec2::from_speed_heading`], in `[0, 360)`.
    pub fn heading_degrees(self) -> f64 {
        (-self.y).atan2(self.x).to_degrees().rem_euclid(360.0)
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Calculates the squared magnitude (length) of the vector.
    /// Useful for comparisons as it avoids a square root.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns the unit vector, or `None` when the length is below `epsilon`.
    pub fn try_normalize(self, epsilon: f64) -> Option<Self> {
        let mag = self.magnitude();
        if mag < epsilon {
            None
        } else {
            Some(self / mag)
        }
    }

    /// Calculates the squared distance between two vector points.
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Rotates the point by `angle` radians around `origin`.
    pub fn rotate_about(self, angle: f64, origin: Vec2) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        let d = self - origin;
        Self::new(
            cos_a * d.x - sin_a * d.y + origin.x,
            sin_a * d.x + cos_a * d.y + origin.y,
        )
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec2_arithmetic() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(v2 / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));

        let mut v = v1;
        v += v2;
        v -= Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_vec2_dot_and_cross() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < EPSILON);
        assert!((v1.cross(v2) - -2.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_magnitude_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);

        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert!((a.distance_squared(b) - 25.0).abs() < EPSILON);
        assert!((b.distance(a) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_try_normalize() {
        let n = Vec2::new(3.0, 4.0).try_normalize(EPSILON).unwrap();
        assert!((n.magnitude() - 1.0).abs() < EPSILON);
        assert!((n.x - 0.6).abs() < EPSILON);
        assert!((n.y - 0.8).abs() < EPSILON);

        assert_eq!(Vec2::ZERO.try_normalize(EPSILON), None);
    }

    #[test]
    fn test_vec2_rotate_about_origin() {
        let v = Vec2::new(1.0, 0.0);
        let v90 = v.rotate_about(PI / 2.0, Vec2::ZERO);
        assert!(v90.x.abs() < EPSILON);
        assert!((v90.y - 1.0).abs() < EPSILON);

        let v180 = v.rotate_about(PI, Vec2::ZERO);
        assert!((v180.x - -1.0).abs() < EPSILON);
        assert!(v180.y.abs() < EPSILON);
    }

    #[test]
    fn test_vec2_rotate_about_point() {
        // (2,1) around (1,1) by 90 degrees lands on (1,2)
        let p = Vec2::new(2.0, 1.0).rotate_about(PI / 2.0, Vec2::new(1.0, 1.0));
        assert!((p.x - 1.0).abs() < EPSILON);
        assert!((p.y - 2.0).abs() < EPSILON);

        // Rotating the origin point itself is a no-op
        let o = Vec2::new(5.0, -3.0);
        assert_eq!(o.rotate_about(1.234, o), o);
    }

    #[test]
    fn test_speed_heading_round_trip_on_canvas_axes() {
        // 90 degrees points up the screen, which is negative y
        let up = Vec2::from_speed_heading(2.0, 90.0);
        assert!(up.x.abs() < EPSILON);
        assert!((up.y - -2.0).abs() < EPSILON);
        assert!((up.heading_degrees() - 90.0).abs() < 1e-9);

        let down_left = Vec2::new(-1.0, 1.0);
        assert!((down_left.heading_degrees() - 225.0).abs() < 1e-9);
        assert!((Vec2::new(1.0, 0.0).heading_degrees()).abs() < EPSILON);
    }
}
