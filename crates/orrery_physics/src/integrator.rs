use orrery_core::constants::{BOUNCE_RESTITUTION, MAX_ACCEL, MAX_SPEED};
use orrery_core::{Body, WorldBounds};

/// Rescale (x, y) so its magnitude does not exceed `limit`
fn clamp_magnitude(x: f32, y: f32, limit: f32) -> (f32, f32) {
    let mag = x.hypot(y);
    if mag > limit {
        let s = limit / mag;
        (x * s, y * s)
    } else {
        (x, y)
    }
}

/// Advance one body by `dt` using its accumulated acceleration.
///
/// Semi-implicit Euler with clamps: acceleration is capped at `MAX_ACCEL`
/// before the velocity update, velocity at `MAX_SPEED` before the position
/// update. Bodies flagged `bounce_on_edges` are clamped to the world
/// rectangle with an inelastic rebound on the hit axis.
///
/// The caller guarantees `dt >= 0` and pre-clamps frame hitches.
pub fn step_body(body: &mut Body, dt: f32, bounds: &WorldBounds) {
    let (ax, ay) = clamp_magnitude(body.ax, body.ay, MAX_ACCEL);
    body.ax = ax;
    body.ay = ay;

    body.vx += body.ax * dt;
    body.vy += body.ay * dt;

    let (vx, vy) = clamp_magnitude(body.vx, body.vy, MAX_SPEED);
    body.vx = vx;
    body.vy = vy;

    body.x += body.vx * dt;
    body.y += body.vy * dt;

    if body.bounce_on_edges {
        bounce(body, bounds);
    }
}

/// Clamp to the edge and reflect the axis velocity, keeping only a quarter
/// of it
fn bounce(body: &mut Body, bounds: &WorldBounds) {
    if body.x < body.radius {
        body.x = body.radius;
        body.vx *= -BOUNCE_RESTITUTION;
    } else if body.x > bounds.width - body.radius {
        body.x = bounds.width - body.radius;
        body.vx *= -BOUNCE_RESTITUTION;
    }

    if body.y < body.radius {
        body.y = body.radius;
        body.vy *= -BOUNCE_RESTITUTION;
    } else if body.y > bounds.height - body.radius {
        body.y = bounds.height - body.radius;
        body.vy *= -BOUNCE_RESTITUTION;
    }
}
