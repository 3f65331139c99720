//! Headless orbit-stability census across seeded sandbox runs.
//!
//! Each run spawns a cloud of orbit-seeded bodies around the sun, advances
//! the full tick pipeline for a simulated minute, and classifies what is
//! left: still gravitationally bound, escaped, or swallowed by the sun.
//! A healthy spawn heuristic keeps most bodies bound.

use orrery_core::SimConfig;
use orrery_core::constants::G;
use orrery_sim::world::WorldState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

struct RunStats {
    seed: u64,
    survivors: usize,
    bound: usize,
    swallowed_mass: f32,
}

fn main() {
    let num_runs = 20;
    let spawn_count = 50;
    let dt = 1.0 / 60.0_f32;
    let ticks = 3600; // one simulated minute

    eprintln!("Simulating {num_runs} runs of {spawn_count} spawns each...");

    let mut stats: Vec<RunStats> = Vec::new();

    for run in 0..num_runs {
        let seed = 1000 + run as u64 * 7919;
        let config = SimConfig {
            seed,
            ..SimConfig::default()
        };
        let sun_mass = config.sun_mass;
        let mut world = WorldState::new(config);

        // spawn positions from a separate stream so the census is
        // reproducible independent of the world's own draws
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(2));
        for _ in 0..spawn_count {
            let pos = (
                rng.gen_range(0.0..world.bounds.width),
                rng.gen_range(0.0..world.bounds.height),
            );
            world.spawn_at(pos, 0.0);
        }

        for _ in 0..ticks {
            world.tick(dt);
        }

        stats.push(classify(&world, seed, sun_mass));

        if (run + 1) % 5 == 0 {
            eprint!("  {}/{}...\r", run + 1, num_runs);
        }
    }
    eprintln!();

    print_census(&stats, spawn_count, ticks as f32 * dt);
}

/// Count survivors and how many of them remain bound to the primary
fn classify(world: &WorldState, seed: u64, sun_mass: f32) -> RunStats {
    // index of the heaviest body (the sun; it only ever gains mass)
    let mut primary = 0;
    for (i, b) in world.bodies.iter().enumerate() {
        if b.mass > world.bodies[primary].mass {
            primary = i;
        }
    }
    let sun = &world.bodies[primary];

    let mut bound = 0;
    let mut survivors = 0;
    for (i, b) in world.bodies.iter().enumerate() {
        if i == primary {
            continue;
        }
        survivors += 1;

        let r = sun.distance_to(b).max(1.0);
        let v_rel = (b.vx - sun.vx).hypot(b.vy - sun.vy);
        let v_escape = (2.0 * G * sun.mass / r).sqrt();
        if v_rel < v_escape {
            bound += 1;
        }
    }

    RunStats {
        seed,
        survivors,
        bound,
        swallowed_mass: sun.mass - sun_mass,
    }
}

fn print_census(stats: &[RunStats], spawn_count: usize, sim_seconds: f32) {
    println!();
    println!("ORBIT-STABILITY CENSUS: {} runs x {} spawns, {:.0} s each", stats.len(), spawn_count, sim_seconds);
    println!();
    println!("  {:>6}  {:>9}  {:>7}  {:>9}", "seed", "survivors", "bound", "swallowed");

    let mut total_survivors = 0;
    let mut total_bound = 0;
    for s in stats {
        total_survivors += s.survivors;
        total_bound += s.bound;
        println!(
            "  {:>6}  {:>9}  {:>7}  {:>9.0}",
            s.seed, s.survivors, s.bound, s.swallowed_mass
        );
    }

    let bound_pct = if total_survivors > 0 {
        total_bound as f64 / total_survivors as f64 * 100.0
    } else {
        0.0
    };
    let survivor_pct =
        total_survivors as f64 / (stats.len() * spawn_count) as f64 * 100.0;

    println!();
    println!("  Survivors: {:>5.1}% {}", survivor_pct, bar(survivor_pct));
    println!("  Bound:     {:>5.1}% {}", bound_pct, bar(bound_pct));
}

fn bar(pct: f64) -> String {
    "█".repeat((pct * 0.4) as usize)
}
