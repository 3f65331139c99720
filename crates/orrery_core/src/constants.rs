// Simulation constants (screen-scaled units)
// Distances are in pixels and time is in seconds, so G is tuned for
// orbits that fit a desktop window rather than any physical unit system.

use crate::types::Rgb;

/// Gravitational constant in simulation units
pub const G: f32 = 900.0;

/// Softening length added in quadrature to pair separations,
/// bounding the force as two bodies approach zero distance
pub const SOFTENING: f32 = 90.0;

/// Acceleration magnitude cap applied before the velocity update
pub const MAX_ACCEL: f32 = 2200.0;

/// Speed cap applied after the velocity update
pub const MAX_SPEED: f32 = 2600.0;

/// Fraction of the inbound axis velocity kept (and reversed) on a wall hit
pub const BOUNCE_RESTITUTION: f32 = 0.25;

/// Extra distance beyond touching that click/fling spawns keep from the primary
pub const SPAWN_CLEARANCE: f32 = 180.0;

/// Inclusive radius range new bodies are drawn from
pub const SPAWN_RADIUS_MIN: i32 = 10;
pub const SPAWN_RADIUS_MAX: i32 = 26;

/// Mass per squared radius for click-spawned (orbit-seeded) bodies
pub const CLICK_MASS_FACTOR: f32 = 3.5;

/// Mass per squared radius for fling-spawned bodies
pub const FLING_MASS_FACTOR: f32 = 4.0;

/// Radius floor after a merge: sqrt(mass) * this scale
pub const RADIUS_MASS_SCALE: f32 = 0.35;

/// Drag vector to launch velocity multiplier for fling spawns
pub const FLING_VELOCITY_SCALE: f32 = 2.8;

/// Largest per-frame dt the driver feeds the integrator
pub const MAX_FRAME_DT: f32 = 0.03;

/// Seconds of simulated time between run-tracker samples
pub const SAMPLE_INTERVAL: f64 = 10.0;

/// Central sun defaults
pub const SUN_MASS: f32 = 70000.0;
pub const SUN_RADIUS: f32 = 70.0;
pub const SUN_COLOR: Rgb = Rgb(255, 170, 90);

/// Background star count
pub const STAR_COUNT: u32 = 250;

/// Mass at which the render tint has darkened roughly halfway
pub const MASS_TINT_PIVOT: f32 = 90000.0;

/// Base colors new bodies are drawn from
pub const PALETTE: [Rgb; 11] = [
    Rgb(202, 255, 253),
    Rgb(255, 242, 204),
    Rgb(255, 191, 0),
    Rgb(209, 110, 120),
    Rgb(209, 12, 12),
    Rgb(82, 17, 17),
    Rgb(166, 152, 242),
    Rgb(155, 52, 237),
    Rgb(52, 237, 173),
    Rgb(0, 255, 240),
    Rgb(104, 135, 2),
];
