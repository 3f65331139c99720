use bevy::prelude::*;
use orrery_core::constants::FLING_VELOCITY_SCALE;
use orrery_sim::state::AppState;
use orrery_sim::world::WorldState;

use super::view::{cursor_sim_pos, sim_to_render};

/// In-progress right-button drag (fling gesture), in simulation coordinates
#[derive(Resource, Default)]
pub struct DragState {
    pub active: bool,
    pub start: (f32, f32),
    pub last: (f32, f32),
}

/// Mouse handling: left click spawns an orbiter (Shift makes it chaotic),
/// right drag flings a body along the pulled-back vector
pub fn pointer_system(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut world: ResMut<WorldState>,
    mut drag: ResMut<DragState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };

    if let Some(pos) = cursor_sim_pos(window, camera, camera_transform, &world.bounds) {
        if buttons.just_pressed(MouseButton::Left) {
            let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
            let chaos = if shift { 1.0 } else { 0.0 };
            world.spawn_at(pos, chaos);
        }

        if buttons.just_pressed(MouseButton::Right) {
            drag.active = true;
            drag.start = pos;
            drag.last = pos;
        } else if drag.active {
            drag.last = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) && drag.active {
        drag.active = false;
        let velocity = (
            (drag.start.0 - drag.last.0) * FLING_VELOCITY_SCALE,
            (drag.start.1 - drag.last.1) * FLING_VELOCITY_SCALE,
        );
        world.fling_at(drag.start, velocity);
    }
}

/// Keyboard handling: C clears the world, Tab toggles the chart, Esc quits
pub fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut world: ResMut<WorldState>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::KeyC) {
        world.clear();
    }
    if keys.just_pressed(KeyCode::Tab) {
        let to = match state.get() {
            AppState::Sandbox => AppState::Chart,
            AppState::Chart => AppState::Sandbox,
        };
        next_state.set(to);
    }
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

/// Show the pull-back vector while a fling drag is in progress
pub fn draw_drag_line(drag: Res<DragState>, world: Res<WorldState>, mut gizmos: Gizmos) {
    if !drag.active {
        return;
    }
    let a = sim_to_render(&world.bounds, drag.start.0, drag.start.1);
    let b = sim_to_render(&world.bounds, drag.last.0, drag.last.1);
    gizmos.line_2d(a, b, Color::WHITE);
}
