use orrery_core::Body;
use orrery_core::constants::RADIUS_MASS_SCALE;
use orrery_core::types::Rgb;

/// Resolve overlaps by merging, until no colliding pair remains in the pass.
///
/// Pairs are scanned with nested indices (i, j = i+1..). When two bodies
/// overlap the lighter is absorbed into the heavier (ties keep the current
/// order), the loser is removed, and the inner scan continues at the same j
/// so a freshly grown body can swallow the next candidate in the same pass.
/// The outer index only advances once its inner scan runs dry.
pub fn merge_collisions(bodies: &mut Vec<Body>) {
    let mut i = 0;
    while i < bodies.len() {
        let mut j = i + 1;
        while j < bodies.len() {
            let dist = bodies[i].distance_to(&bodies[j]);
            if dist < bodies[i].radius + bodies[j].radius {
                if bodies[i].mass < bodies[j].mass {
                    bodies.swap(i, j);
                }
                let loser = bodies.remove(j);
                absorb(&mut bodies[i], &loser);
                // list shrank: the next candidate now sits at this same j
                continue;
            }
            j += 1;
        }
        i += 1;
    }
}

/// Fold `b` into `a`: momentum-conserving velocity, mass-weighted position,
/// summed mass, radius floor from the new mass, blended base color
fn absorb(a: &mut Body, b: &Body) {
    let total = a.mass + b.mass;

    a.vx = (a.mass * a.vx + b.mass * b.vx) / total;
    a.vy = (a.mass * a.vy + b.mass * b.vy) / total;
    a.x = (a.mass * a.x + b.mass * b.x) / total;
    a.y = (a.mass * a.y + b.mass * b.y) / total;

    a.mass = total;
    a.radius = a.radius.max(total.sqrt() * RADIUS_MASS_SCALE);
    a.base_color = Rgb::mix(a.base_color, b.base_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f32, y: f32, vx: f32, vy: f32, mass: f32, radius: f32) -> Body {
        Body::new((x, y), (vx, vy), mass, radius, Rgb(100, 100, 100))
    }

    #[test]
    fn test_momentum_conserved_across_merge() {
        let mut bodies = vec![
            body(0.0, 0.0, 50.0, 10.0, 300.0, 20.0),
            body(15.0, 0.0, -20.0, 5.0, 100.0, 20.0),
        ];
        let px = 300.0 * 50.0 + 100.0 * -20.0;
        let py = 300.0 * 10.0 + 100.0 * 5.0;

        merge_collisions(&mut bodies);

        assert_eq!(bodies.len(), 1);
        let m = &bodies[0];
        assert!((m.mass * m.vx - px).abs() < 1e-2, "px {} != {}", m.mass * m.vx, px);
        assert!((m.mass * m.vy - py).abs() < 1e-2, "py {} != {}", m.mass * m.vy, py);
    }

    #[test]
    fn test_mass_conserved_across_cascade() {
        // chain of overlapping bodies; one pass collapses them all
        let mut bodies = vec![
            body(0.0, 0.0, 0.0, 0.0, 400.0, 30.0),
            body(40.0, 0.0, 0.0, 0.0, 100.0, 30.0),
            body(80.0, 0.0, 0.0, 0.0, 50.0, 30.0),
            body(120.0, 0.0, 0.0, 0.0, 25.0, 30.0),
        ];
        merge_collisions(&mut bodies);
        assert_eq!(bodies.len(), 1);
        assert!((bodies[0].mass - 575.0).abs() < 1e-3);
    }

    #[test]
    fn test_heavier_body_survives_in_place() {
        let mut bodies = vec![
            body(0.0, 0.0, 0.0, 0.0, 10.0, 20.0),
            body(10.0, 0.0, 0.0, 0.0, 1000.0, 20.0),
        ];
        merge_collisions(&mut bodies);
        assert_eq!(bodies.len(), 1);
        // merged position sits near the heavy body
        assert!(bodies[0].x > 9.0);
    }

    #[test]
    fn test_radius_never_shrinks() {
        let mut bodies = vec![
            body(0.0, 0.0, 0.0, 0.0, 100.0, 25.0),
            body(10.0, 0.0, 0.0, 0.0, 100.0, 8.0),
        ];
        merge_collisions(&mut bodies);
        assert!(bodies[0].radius >= 25.0);

        // small radii grow to the sqrt(mass) floor
        let mut smalls = vec![
            body(0.0, 0.0, 0.0, 0.0, 10000.0, 3.0),
            body(2.0, 0.0, 0.0, 0.0, 10000.0, 3.0),
        ];
        merge_collisions(&mut smalls);
        let floor = (20000.0_f32).sqrt() * RADIUS_MASS_SCALE;
        assert!((smalls[0].radius - floor).abs() < 1e-3);
    }

    #[test]
    fn test_color_blended_per_channel() {
        let mut bodies = vec![
            body(0.0, 0.0, 0.0, 0.0, 100.0, 20.0),
            body(10.0, 0.0, 0.0, 0.0, 100.0, 20.0),
        ];
        bodies[0].base_color = Rgb(0, 200, 255);
        bodies[1].base_color = Rgb(100, 100, 255);
        merge_collisions(&mut bodies);
        assert_eq!(bodies[0].base_color, Rgb(50, 150, 255));
    }

    #[test]
    fn test_separated_bodies_untouched() {
        let mut bodies = vec![
            body(0.0, 0.0, 1.0, 0.0, 100.0, 10.0),
            body(500.0, 0.0, -1.0, 0.0, 100.0, 10.0),
        ];
        merge_collisions(&mut bodies);
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].mass, 100.0);
    }

    #[test]
    fn test_empty_and_single_lists_valid() {
        let mut none: Vec<Body> = Vec::new();
        merge_collisions(&mut none);
        assert!(none.is_empty());

        let mut one = vec![body(0.0, 0.0, 0.0, 0.0, 100.0, 10.0)];
        merge_collisions(&mut one);
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_tie_keeps_first_body() {
        let mut bodies = vec![
            body(0.0, 0.0, 0.0, 0.0, 100.0, 25.0),
            body(10.0, 0.0, 0.0, 0.0, 100.0, 8.0),
        ];
        merge_collisions(&mut bodies);
        assert_eq!(bodies.len(), 1);
        // equal masses: the earlier body absorbs the later one, keeping its radius
        assert_eq!(bodies[0].radius, 25.0);
    }
}
