use bevy::prelude::*;
use orrery_core::RunSample;

/// Samples the live body count at a fixed simulated-time interval.
///
/// Fed every tick; decides on its own when a sample is due. A lag spike
/// that jumps past several interval marks records one sample per mark,
/// each stamped at its mark rather than at the jagged frame time.
#[derive(Resource)]
pub struct RunTracker {
    sample_every: f64,
    points: Vec<RunSample>,
    elapsed: f64,
    since_sample: f64,
}

impl RunTracker {
    pub fn new(sample_every_seconds: f64) -> Self {
        Self {
            sample_every: sample_every_seconds,
            points: Vec::new(),
            elapsed: 0.0,
            since_sample: 0.0,
        }
    }

    /// Call once per tick with the tick's dt and the post-tick body count
    pub fn update(&mut self, dt: f64, body_count: usize) {
        self.elapsed += dt;
        self.since_sample += dt;

        while self.since_sample >= self.sample_every {
            self.since_sample -= self.sample_every;
            let t_mark = self.elapsed - self.since_sample;
            self.points.push(RunSample {
                t: t_mark,
                bodies: body_count,
            });
        }
    }

    /// Total simulated seconds fed so far
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    /// Seconds between samples
    pub fn sample_every(&self) -> f64 {
        self.sample_every
    }

    pub fn points(&self) -> &[RunSample] {
        &self.points
    }
}
