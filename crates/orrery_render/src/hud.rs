use bevy::prelude::*;
use orrery_sim::world::WorldState;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Orrery"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Update HUD text every 10th frame (string formatting is expensive)
pub fn update_hud(
    world: Res<WorldState>,
    mut throttle: ResMut<HudThrottle>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }

    if let Ok(mut text) = query.get_single_mut() {
        **text = format!(
            "Bodies: {}\n\
             Greatest mass: {:.1}\n\
             \n\
             [LMB] Spawn orbiter  [Shift+LMB] Chaotic spawn\n\
             [RMB drag] Fling  [C] Clear  [Tab] Chart  [Esc] Quit",
            world.body_count(),
            world.greatest_mass(),
        );
    }
}
