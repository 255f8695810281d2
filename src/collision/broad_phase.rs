//! Constant-time pair rejection run before any geometry test.

use crate::objects::Body;

/// Whether two bodies may be approaching each other.
///
/// A pair is closing on an axis when its displacement `b - a` and relative
/// velocity `vb - va` have opposite signs there. Pairs closing on neither
/// axis are skipped. Approaching pairs always pass; passing says nothing
/// about whether they touch.
pub fn is_closing(a: &Body, b: &Body) -> bool {
    let relative_velocity = b.velocity - a.velocity;
    let displacement = b.position - a.position;

    let closing_x = displacement.x * relative_velocity.x < 0.0;
    let closing_y = displacement.y * relative_velocity.y < 0.0;
    closing_x || closing_y
}
