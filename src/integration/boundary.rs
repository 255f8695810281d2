use serde::{Deserialize, Serialize};

use crate::objects::Body;

/// The playable area, spanning `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Keeps a body's `size/2` extent inside the area.
    ///
    /// A body poking past an edge is snapped back to touch it. With `bounce`
    /// set, the velocity component across that edge is also inverted;
    /// otherwise velocity is left as it was. Returns whether anything was
    /// clamped.
    pub fn contain(&self, body: &mut Body, bounce: bool) -> bool {
        let half = body.half_size();
        let extent = body.calculate_aabb();
        let mut clamped = false;

        if extent.min.x < 0.0 {
            body.position.x = half;
            clamped = true;
            if bounce {
                body.velocity.x = -body.velocity.x;
            }
        }
        if extent.max.x > self.width {
            body.position.x = self.width - half;
            clamped = true;
            if bounce {
                body.velocity.x = -body.velocity.x;
            }
        }
        if extent.min.y < 0.0 {
            body.position.y = half;
            clamped = true;
            if bounce {
                body.velocity.y = -body.velocity.y;
            }
        }
        if extent.max.y > self.height {
            body.position.y = self.height - half;
            clamped = true;
            if bounce {
                body.velocity.y = -body.velocity.y;
            }
        }
        clamped
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
