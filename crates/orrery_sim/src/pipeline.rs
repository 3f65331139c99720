use bevy::prelude::*;
use orrery_core::constants::MAX_FRAME_DT;

use super::state::AppState;
use super::tracker::RunTracker;
use super::world::WorldState;

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulation_tick.run_if(in_state(AppState::Sandbox)));
    }
}

/// Main simulation tick — advances the world and feeds the run tracker.
/// Frame hitches are clamped to MAX_FRAME_DT to bound integration error.
fn simulation_tick(
    mut world: ResMut<WorldState>,
    mut tracker: ResMut<RunTracker>,
    time: Res<Time>,
) {
    let dt = time.delta_secs().min(MAX_FRAME_DT);
    world.tick(dt);
    tracker.update(dt as f64, world.body_count());
}
