use bevy::prelude::*;
use orrery_core::SimConfig;
use orrery_render::plugin::OrreryRenderPlugin;
use orrery_sim::pipeline::SimulationPlugin;
use orrery_sim::state::AppState;
use orrery_sim::tracker::RunTracker;
use orrery_sim::world::WorldState;
use orrery_storage::{RunRecord, append_run, now_iso};
use std::path::PathBuf;

fn main() {
    let config = SimConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery — Gravity Sandbox".into(),
                resolution: (config.world_width, config.world_height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(RunTracker::new(config.sample_every_seconds))
        .insert_resource(WorldState::new(config))
        .init_state::<AppState>()
        .add_plugins(SimulationPlugin)
        .add_plugins(OrreryRenderPlugin)
        .add_systems(Last, save_run_on_exit)
        .run();
}

/// Append the finished run's samples to the on-disk history as the app
/// closes. A failed save is reported, never fatal.
fn save_run_on_exit(mut exits: EventReader<AppExit>, tracker: Res<RunTracker>) {
    if exits.read().next().is_none() {
        return;
    }

    let record = RunRecord {
        body_points: tracker.points().to_vec(),
        time_ended: tracker.elapsed_seconds(),
        date_done: now_iso(),
    };

    let path = PathBuf::from("game_data.json");
    match append_run(&path, record) {
        Ok(()) => info!("Saved run history to {}", path.display()),
        Err(e) => warn!("Could not save run history: {e}"),
    }
}
