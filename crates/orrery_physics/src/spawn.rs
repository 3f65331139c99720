//! Spawn placement and orbit seeding.
//!
//! New bodies are placed clear of the current primary (the heaviest body)
//! and given an approximately circular orbital velocity around it, with
//! tunable jitter so clusters of spawns don't move in lockstep.

use std::f32::consts::TAU;

use orrery_core::constants::{
    CLICK_MASS_FACTOR, FLING_MASS_FACTOR, G, PALETTE, SPAWN_CLEARANCE, SPAWN_RADIUS_MAX,
    SPAWN_RADIUS_MIN,
};
use orrery_core::{Body, Rgb};
use rand::Rng;

/// The most massive body in the set; ties keep the earliest entry.
///
/// Panics if `bodies` is empty — the world permanently holds at least the
/// central sun, so callers never pass an empty set.
pub fn pick_primary(bodies: &[Body]) -> &Body {
    let mut biggest = &bodies[0];
    for b in &bodies[1..] {
        if b.mass > biggest.mass {
            biggest = b;
        }
    }
    biggest
}

/// Nudge a requested spawn point so the new body cannot overlap the primary.
///
/// Inside the clearance ring the point is pushed radially outward to exactly
/// `primary.radius + new_radius + SPAWN_CLEARANCE`; a degenerate request at
/// the primary's center picks a random angle on that ring instead.
pub fn safe_spawn_pos(
    primary: &Body,
    pos: (f32, f32),
    new_radius: f32,
    rng: &mut impl Rng,
) -> (f32, f32) {
    let dx = pos.0 - primary.x;
    let dy = pos.1 - primary.y;
    let dist = dx.hypot(dy);
    let min_dist = primary.radius + new_radius + SPAWN_CLEARANCE;

    if dist < 1.0 {
        let ang = rng.gen_range(0.0..TAU);
        return (
            primary.x + ang.cos() * min_dist,
            primary.y + ang.sin() * min_dist,
        );
    }

    if dist < min_dist {
        let nx = dx / dist;
        let ny = dy / dist;
        return (primary.x + nx * min_dist, primary.y + ny * min_dist);
    }

    pos
}

/// Velocity for an approximately stable orbit of the primary from `pos`.
///
/// `chaos` in [0, 1] widens the tangential/radial jitter bands from calm
/// near-circular orbits (0) to eccentric, noisy ones (1). A position within
/// one unit of the primary's center gets a zero velocity instead of a
/// division by a near-zero radius.
pub fn orbit_velocity(primary: &Body, pos: (f32, f32), chaos: f32, rng: &mut impl Rng) -> (f32, f32) {
    let dx = pos.0 - primary.x;
    let dy = pos.1 - primary.y;
    let r = dx.hypot(dy);
    if r < 1.0 {
        return (0.0, 0.0);
    }

    let v_circ = (G * primary.mass / r.max(1.0)).sqrt();

    let tangential_scale = rng.gen_range((0.85 - 0.25 * chaos)..(1.08 + 0.25 * chaos));
    let radial_scale = rng.gen_range((-0.10 - 0.30 * chaos)..(0.10 + 0.30 * chaos));

    // unit tangential and radial directions
    let tx = -dy / r;
    let ty = dx / r;
    let rx = dx / r;
    let ry = dy / r;

    let v = v_circ * tangential_scale;
    let vr = v_circ * radial_scale;

    let mut vx = v * tx + vr * rx;
    let mut vy = v * ty + vr * ry;

    let noise = (0.03 + 0.10 * chaos) * v_circ;
    vx += rng.gen_range(-noise..noise);
    vy += rng.gen_range(-noise..noise);

    (vx, vy)
}

/// Click-spawn: a random-sized body at a collision-safe position, seeded
/// onto an orbit of the current primary
pub fn spawn_body(pos: (f32, f32), bodies: &[Body], chaos: f32, rng: &mut impl Rng) -> Body {
    let radius = rng.gen_range(SPAWN_RADIUS_MIN..=SPAWN_RADIUS_MAX) as f32;
    let mass = radius * radius * CLICK_MASS_FACTOR;
    let base_color = palette_pick(rng);

    let primary = pick_primary(bodies);
    let pos = safe_spawn_pos(primary, pos, radius, rng);
    let vel = orbit_velocity(primary, pos, chaos, rng);

    Body::new(pos, vel, mass, radius, base_color)
}

/// Fling-spawn: same safe placement, but the velocity comes from the user's
/// drag gesture rather than the orbit heuristic
pub fn fling_body(pos: (f32, f32), velocity: (f32, f32), bodies: &[Body], rng: &mut impl Rng) -> Body {
    let radius = rng.gen_range(SPAWN_RADIUS_MIN..=SPAWN_RADIUS_MAX) as f32;
    let mass = radius * radius * FLING_MASS_FACTOR;
    let base_color = palette_pick(rng);

    let primary = pick_primary(bodies);
    let pos = safe_spawn_pos(primary, pos, radius, rng);

    Body::new(pos, velocity, mass, radius, base_color)
}

fn palette_pick(rng: &mut impl Rng) -> Rgb {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::constants::SPAWN_CLEARANCE;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sun() -> Body {
        Body::new((960.0, 540.0), (0.0, 0.0), 70000.0, 70.0, Rgb(255, 170, 90))
    }

    #[test]
    fn test_primary_is_heaviest_first_on_tie() {
        let bodies = vec![
            Body::new((0.0, 0.0), (0.0, 0.0), 50.0, 5.0, Rgb(0, 0, 0)),
            Body::new((1.0, 0.0), (0.0, 0.0), 500.0, 5.0, Rgb(1, 0, 0)),
            Body::new((2.0, 0.0), (0.0, 0.0), 500.0, 5.0, Rgb(2, 0, 0)),
        ];
        let p = pick_primary(&bodies);
        assert_eq!(p.base_color, Rgb(1, 0, 0));
    }

    #[test]
    fn test_center_spawn_lands_on_clearance_ring() {
        let primary = sun();
        let min_dist = primary.radius + 12.0 + SPAWN_CLEARANCE;
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let pos = safe_spawn_pos(&primary, (primary.x, primary.y), 12.0, &mut rng);
            let d = (pos.0 - primary.x).hypot(pos.1 - primary.y);
            assert!((d - min_dist).abs() < 1e-2, "seed {seed}: d = {d}");
        }
    }

    #[test]
    fn test_near_spawn_pushed_radially_out() {
        let primary = sun();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let request = (primary.x + 50.0, primary.y);
        let pos = safe_spawn_pos(&primary, request, 12.0, &mut rng);
        let min_dist = primary.radius + 12.0 + SPAWN_CLEARANCE;
        // pushed straight out along +x
        assert!((pos.0 - (primary.x + min_dist)).abs() < 1e-2);
        assert!((pos.1 - primary.y).abs() < 1e-3);
    }

    #[test]
    fn test_far_spawn_unchanged() {
        let primary = sun();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let request = (primary.x + 800.0, primary.y - 300.0);
        let pos = safe_spawn_pos(&primary, request, 12.0, &mut rng);
        assert_eq!(pos, request);
    }

    #[test]
    fn test_orbit_velocity_zero_at_center() {
        let primary = sun();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let v = orbit_velocity(&primary, (primary.x, primary.y), 1.0, &mut rng);
        assert_eq!(v, (0.0, 0.0));
    }

    #[test]
    fn test_calm_orbit_speed_near_circular() {
        let primary = sun();
        let r = 400.0;
        let v_circ = (G * primary.mass / r).sqrt();
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let v = orbit_velocity(&primary, (primary.x + r, primary.y), 0.0, &mut rng);
            let speed = v.0.hypot(v.1);
            // chaos 0: tangential in [0.85, 1.08], radial in [-0.10, 0.10],
            // noise within 3% per axis
            assert!(
                speed > 0.7 * v_circ && speed < 1.25 * v_circ,
                "seed {seed}: speed {speed} vs v_circ {v_circ}"
            );
        }
    }

    #[test]
    fn test_click_spawn_mass_and_size() {
        let bodies = vec![sun()];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let b = spawn_body((1500.0, 200.0), &bodies, 0.0, &mut rng);
        assert!(b.radius >= SPAWN_RADIUS_MIN as f32 && b.radius <= SPAWN_RADIUS_MAX as f32);
        assert!((b.mass - b.radius * b.radius * CLICK_MASS_FACTOR).abs() < 1e-3);
        assert!(!b.bounce_on_edges);
    }

    #[test]
    fn test_fling_spawn_uses_given_velocity() {
        let bodies = vec![sun()];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let b = fling_body((1500.0, 200.0), (123.0, -45.0), &bodies, &mut rng);
        assert_eq!((b.vx, b.vy), (123.0, -45.0));
        assert!((b.mass - b.radius * b.radius * FLING_MASS_FACTOR).abs() < 1e-3);
    }
}
