use serde::{Deserialize, Serialize};

use crate::collision::AABB;
use crate::error::{KernelError, KernelResult};
use crate::integration::wrap_degrees;
use crate::math::vec2::Vec2;
use crate::shapes::{polygon, Circle, ShapeKind};

/// A moving circle or square on the playground.
///
/// Velocity and angular velocity are per-tick quantities: one tick adds them
/// to position and angle directly. Square corners are never stored; they are
/// derived from `position`, `size` and `angle` each time [`Body::vertices`]
/// is called, so editing any of those fields can't leave stale geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub kind: ShapeKind,
    /// Diameter for circles, side length for squares.
    pub size: f64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f64,
    /// Degrees, kept in `[0, 360)` by the integrator.
    pub angle: f64,
    /// Degrees per tick. Only turns the vertex set; collisions ignore it.
    pub angular_velocity: f64,
}

impl Body {
    /// Creates a body after checking that size and mass are positive.
    pub fn new(
        kind: ShapeKind,
        size: f64,
        position: Vec2,
        velocity: Vec2,
        mass: f64,
        angle: f64,
    ) -> KernelResult<Self> {
        validate_size(size)?;
        validate_mass(mass)?;
        Ok(Self {
            kind,
            size,
            position,
            velocity,
            mass,
            angle: wrap_degrees(angle),
            angular_velocity: 0.0,
        })
    }

    /// A resting body whose mass is its area.
    pub fn with_default_mass(kind: ShapeKind, size: f64, position: Vec2) -> KernelResult<Self> {
        Self::new(kind, size, position, Vec2::ZERO, kind.default_mass(size), 0.0)
    }

    pub fn circle(size: f64, position: Vec2, velocity: Vec2, mass: f64) -> KernelResult<Self> {
        Self::new(ShapeKind::Circle, size, position, velocity, mass, 0.0)
    }

    pub fn square(
        size: f64,
        position: Vec2,
        velocity: Vec2,
        mass: f64,
        angle: f64,
    ) -> KernelResult<Self> {
        Self::new(ShapeKind::Square, size, position, velocity, mass, angle)
    }

    pub fn half_size(&self) -> f64 {
        self.size / 2.0
    }

    /// True when the angle is not a whole number of turns.
    pub fn is_rotated(&self) -> bool {
        self.angle % 360.0 != 0.0
    }

    /// World-space corners of a square, freshly computed. Empty for circles.
    pub fn vertices(&self) -> Vec<Vec2> {
        match self.kind {
            ShapeKind::Circle => Vec::new(),
            ShapeKind::Square => {
                polygon::square_vertices(self.position, self.size, self.angle).to_vec()
            }
        }
    }

    /// The body as a world-space circle, using half the size as radius.
    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.position, self.half_size())
    }

    /// Extent used for border containment: `position +/- size/2`.
    pub fn calculate_aabb(&self) -> AABB {
        let half = Vec2::new(self.half_size(), self.half_size());
        AABB::new(self.position - half, self.position + half)
    }

    /// Whether `point` lies on or inside the body's outline.
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self.kind {
            ShapeKind::Circle => self.bounding_circle().contains_point(point),
            ShapeKind::Square => polygon::contains_point(&self.vertices(), point),
        }
    }

    pub fn set_mass(&mut self, mass: f64) -> KernelResult<()> {
        validate_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    pub fn set_size(&mut self, size: f64) -> KernelResult<()> {
        validate_size(size)?;
        self.size = size;
        Ok(())
    }

    pub fn set_angle(&mut self, degrees: f64) {
        self.angle = wrap_degrees(degrees);
    }

    /// Sets velocity from a speed and an on-screen heading in degrees.
    pub fn set_speed_heading(&mut self, speed: f64, heading_degrees: f64) {
        self.velocity = Vec2::from_speed_heading(speed, heading_degrees);
    }

    /// Linear momentum, `mass * velocity`.
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}

fn validate_size(size: f64) -> KernelResult<()> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(KernelError::InvalidSize { size })
    }
}

fn validate_mass(mass: f64) -> KernelResult<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(KernelError::InvalidMass { mass })
    }
}
