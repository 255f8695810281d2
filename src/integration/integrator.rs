use crate::objects::Body;

/// Advances a body by one tick.
///
/// Velocities are already tick-scaled, so this is a plain Euler step with an
/// implicit `dt` of one: `position += velocity`, `angle += angular_velocity`.
pub fn integrate(body: &mut Body) {
    body.position += body.velocity;
    body.angle = wrap_degrees(body.angle + body.angular_velocity);
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
