//! Impulse-based collision response. Only linear velocity changes.

use tracing::trace;

use super::manifold::Contact;
use crate::objects::Body;

/// Perfectly elastic: the closing speed along the normal is fully reflected.
pub const RESTITUTION: f64 = 1.0;

/// Applies an equal and opposite impulse along `contact.normal`.
///
/// Bodies already separating along the normal are left alone; a relative
/// normal speed of exactly zero still resolves. Positions are not touched,
/// so any overlap remains until the bodies move apart on their own.
///
/// Returns whether an impulse was applied.
pub fn resolve_collision(a: &mut Body, b: &mut Body, contact: &Contact) -> bool {
    let relative_velocity = b.velocity - a.velocity;
    let velocity_along_normal = relative_velocity.dot(contact.normal);

    if velocity_along_normal > 0.0 {
        return false;
    }

    let inv_mass_a = 1.0 / a.mass;
    let inv_mass_b = 1.0 / b.mass;
    let j = -(1.0 + RESTITUTION) * velocity_along_normal / (inv_mass_a + inv_mass_b);
    let impulse = contact.normal * j;

    a.velocity -= impulse * inv_mass_a;
    b.velocity += impulse * inv_mass_b;

    trace!(
        normal = ?contact.normal,
        impulse = j,
        velocity_a = ?a.velocity,
        velocity_b = ?b.velocity,
        "impulse applied"
    );
    true
}
