use serde::{Deserialize, Serialize};

use crate::types::WorldBounds;

/// Sandbox configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// World rectangle width in pixels
    pub world_width: f32,
    /// World rectangle height in pixels
    pub world_height: f32,
    /// Random seed for deterministic spawn draws and star layout
    pub seed: u64,
    /// Mass of the indestructible central sun
    pub sun_mass: f32,
    /// Radius of the central sun
    pub sun_radius: f32,
    /// Background star count
    pub star_count: u32,
    /// Seconds of simulated time between body-count samples
    pub sample_every_seconds: f64,
}

impl SimConfig {
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds {
            width: self.world_width,
            height: self.world_height,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: 1920.0,
            world_height: 1080.0,
            seed: 42,
            sun_mass: crate::constants::SUN_MASS,
            sun_radius: crate::constants::SUN_RADIUS,
            star_count: crate::constants::STAR_COUNT,
            sample_every_seconds: crate::constants::SAMPLE_INTERVAL,
        }
    }
}
