use bevy::prelude::*;
use orrery_core::WorldBounds;

/// Spawn the single 2D camera
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Simulation coordinates ([0,W] x [0,H]) to render space (origin-centered)
pub fn sim_to_render(bounds: &WorldBounds, x: f32, y: f32) -> Vec2 {
    Vec2::new(x - bounds.width / 2.0, y - bounds.height / 2.0)
}

/// Render-space point back to simulation coordinates
pub fn render_to_sim(bounds: &WorldBounds, p: Vec2) -> (f32, f32) {
    (p.x + bounds.width / 2.0, p.y + bounds.height / 2.0)
}

/// Cursor position in simulation coordinates, if the cursor is inside the
/// window
pub fn cursor_sim_pos(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    bounds: &WorldBounds,
) -> Option<(f32, f32)> {
    let cursor = window.cursor_position()?;
    let world = camera.viewport_to_world_2d(camera_transform, cursor).ok()?;
    Some(render_to_sim(bounds, world))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_render_space() {
        let bounds = WorldBounds {
            width: 1920.0,
            height: 1080.0,
        };
        let p = sim_to_render(&bounds, 300.0, 700.0);
        let back = render_to_sim(&bounds, p);
        assert!((back.0 - 300.0).abs() < 1e-3);
        assert!((back.1 - 700.0).abs() < 1e-3);
    }

    #[test]
    fn test_world_center_maps_to_origin() {
        let bounds = WorldBounds {
            width: 1920.0,
            height: 1080.0,
        };
        let p = sim_to_render(&bounds, 960.0, 540.0);
        assert_eq!(p, Vec2::ZERO);
    }
}
