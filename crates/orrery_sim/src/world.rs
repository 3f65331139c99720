use bevy::prelude::*;
use orrery_core::constants::SUN_COLOR;
use orrery_core::{Body, SimConfig, WorldBounds};
use orrery_physics::{collision, forces, integrator, spawn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Global sandbox state, tracked as a Bevy Resource.
///
/// One actor owns the body list and runs the full tick pipeline to
/// completion; render and input systems only touch it between ticks.
#[derive(Resource)]
pub struct WorldState {
    /// Active body set. Order only matters to the merge scan.
    pub bodies: Vec<Body>,
    /// World rectangle for boundary bounce and the starfield
    pub bounds: WorldBounds,
    /// Total simulated seconds this run
    pub elapsed: f64,
    /// Sandbox config
    pub config: SimConfig,
    /// Seeded source for all spawn randomness
    rng: ChaCha8Rng,
}

impl WorldState {
    /// World holding only the central sun
    pub fn new(config: SimConfig) -> Self {
        let bounds = config.bounds();
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = Self {
            bodies: Vec::new(),
            bounds,
            elapsed: 0.0,
            config,
            rng,
        };
        world.bodies.push(world.make_sun());
        world
    }

    /// The indestructible central mass. It bounces off the world edges, so
    /// recoil from swallowed bodies can never carry it out of view.
    fn make_sun(&self) -> Body {
        let center = self.bounds.center();
        Body::new(
            center,
            (0.0, 0.0),
            self.config.sun_mass,
            self.config.sun_radius,
            SUN_COLOR,
        )
        .with_edge_bounce()
    }

    /// Advance the world by one tick: force accumulation, integration,
    /// merge resolution.
    ///
    /// `dt` must be non-negative and pre-clamped by the frame driver.
    pub fn tick(&mut self, dt: f32) {
        forces::accumulate_gravity(&mut self.bodies);
        for body in self.bodies.iter_mut() {
            integrator::step_body(body, dt, &self.bounds);
        }
        collision::merge_collisions(&mut self.bodies);
        self.elapsed += dt as f64;
    }

    /// Click-spawn: orbit-seeded body aimed at `pos` (chaos 0 = calm, 1 = wild).
    /// The primary is recomputed for every call.
    pub fn spawn_at(&mut self, pos: (f32, f32), chaos: f32) {
        let body = spawn::spawn_body(pos, &self.bodies, chaos, &mut self.rng);
        self.bodies.push(body);
    }

    /// Fling-spawn: body launched from `pos` with the drag-derived velocity
    pub fn fling_at(&mut self, pos: (f32, f32), velocity: (f32, f32)) {
        let body = spawn::fling_body(pos, velocity, &self.bodies, &mut self.rng);
        self.bodies.push(body);
    }

    /// Drop everything except a fresh central sun (the C key)
    pub fn clear(&mut self) {
        let sun = self.make_sun();
        self.bodies.clear();
        self.bodies.push(sun);
        info!("World cleared back to the central sun");
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Largest mass currently in the world (HUD readout)
    pub fn greatest_mass(&self) -> f32 {
        self.bodies.iter().map(|b| b.mass).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldState {
        WorldState::new(SimConfig::default())
    }

    #[test]
    fn test_new_world_holds_only_the_sun() {
        let w = world();
        assert_eq!(w.body_count(), 1);
        assert_eq!(w.bodies[0].mass, w.config.sun_mass);
        assert!(w.bodies[0].bounce_on_edges);
        let center = w.bounds.center();
        assert_eq!((w.bodies[0].x, w.bodies[0].y), center);
    }

    #[test]
    fn test_spawn_then_tick_keeps_min_one_body() {
        let mut w = world();
        w.spawn_at((300.0, 300.0), 0.0);
        w.spawn_at((1600.0, 800.0), 1.0);
        assert_eq!(w.body_count(), 3);
        for _ in 0..600 {
            w.tick(1.0 / 60.0);
            assert!(w.body_count() >= 1);
        }
        assert!((w.elapsed - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_on_sun_center_is_pushed_clear() {
        let mut w = world();
        let center = w.bounds.center();
        w.spawn_at(center, 0.0);
        let sun = &w.bodies[0];
        let b = &w.bodies[1];
        let d = sun.distance_to(b);
        assert!(d > sun.radius + b.radius, "spawned overlapping the sun: {d}");
    }

    #[test]
    fn test_head_on_merge_through_tick_pipeline() {
        let mut w = world();
        w.bodies.clear();
        w.bodies.push(Body::new(
            (900.0, 540.0),
            (400.0, 0.0),
            100.0,
            10.0,
            SUN_COLOR,
        ));
        w.bodies.push(Body::new(
            (1020.0, 540.0),
            (-400.0, 0.0),
            100.0,
            10.0,
            SUN_COLOR,
        ));

        w.tick(0.15);

        assert_eq!(w.body_count(), 1);
        assert!((w.bodies[0].mass - 200.0).abs() < 1e-3);
        assert!(w.bodies[0].vx.abs() < 1.0);
    }

    #[test]
    fn test_clear_restores_lone_sun() {
        let mut w = world();
        for i in 0..10 {
            w.spawn_at((100.0 + 150.0 * i as f32, 200.0), 0.5);
        }
        w.tick(1.0 / 60.0);
        w.clear();
        assert_eq!(w.body_count(), 1);
        assert_eq!(w.bodies[0].mass, w.config.sun_mass);
    }

    #[test]
    fn test_seeded_worlds_spawn_identically() {
        let mut a = world();
        let mut b = world();
        a.spawn_at((500.0, 400.0), 0.3);
        b.spawn_at((500.0, 400.0), 0.3);
        assert_eq!((a.bodies[1].x, a.bodies[1].y), (b.bodies[1].x, b.bodies[1].y));
        assert_eq!((a.bodies[1].vx, a.bodies[1].vy), (b.bodies[1].vx, b.bodies[1].vy));
    }
}
