use bevy::prelude::*;
use orrery_sim::state::AppState;

use super::bodies;
use super::chart;
use super::hud;
use super::input;
use super::stars;
use super::view;

/// Main render plugin: the presentation adapter over the simulation state.
/// Holds no simulation logic — every system here only reads `WorldState`
/// or forwards user gestures into it.
pub struct OrreryRenderPlugin;

impl Plugin for OrreryRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<hud::HudThrottle>()
            .init_resource::<input::DragState>()
            .add_systems(
                Startup,
                (
                    view::spawn_camera,
                    hud::spawn_hud,
                    bodies::setup_body_mesh,
                    stars::spawn_starfield,
                ),
            )
            .add_systems(
                Update,
                (
                    input::pointer_system,
                    bodies::sync_body_entities.after(input::pointer_system),
                    bodies::update_body_visuals.after(bodies::sync_body_entities),
                    hud::update_hud,
                    input::draw_drag_line,
                )
                    .run_if(in_state(AppState::Sandbox)),
            )
            .add_systems(Update, input::keyboard_system)
            .add_systems(OnEnter(AppState::Chart), chart::spawn_chart_screen)
            .add_systems(OnExit(AppState::Chart), chart::despawn_chart_screen)
            .add_systems(
                Update,
                (chart::draw_chart, chart::update_chart_status)
                    .run_if(in_state(AppState::Chart)),
            );
    }
}
