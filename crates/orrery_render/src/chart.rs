use bevy::prelude::*;
use orrery_sim::tracker::RunTracker;
use orrery_sim::world::WorldState;

/// Marker for the chart screen's UI root
#[derive(Component)]
pub struct ChartRoot;

/// Marker for the chart status line
#[derive(Component)]
pub struct ChartStatusText;

const CHART_COLOR: Color = Color::srgba(0.0, 1.0, 0.4, 0.9);
const FRAME_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);

/// Inset of the plot rectangle from the window edges, in pixels
const MARGIN: f32 = 120.0;

pub fn spawn_chart_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(30.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                ..default()
            },
            ChartRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Bodies over time"),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
                TextColor(CHART_COLOR),
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
                ChartStatusText,
            ));
        });
}

pub fn despawn_chart_screen(mut commands: Commands, query: Query<Entity, With<ChartRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// Status line under the title: sample count, run length, peak body count
pub fn update_chart_status(
    tracker: Res<RunTracker>,
    mut query: Query<&mut Text, With<ChartStatusText>>,
) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    let points = tracker.points();
    if points.is_empty() {
        **text = format!(
            "No samples yet — one is taken every {:.0} simulated seconds ({:.0} s elapsed)  [Tab] back",
            tracker.sample_every(),
            tracker.elapsed_seconds()
        );
    } else {
        let peak = points.iter().map(|p| p.bodies).max().unwrap_or(0);
        **text = format!(
            "{} samples over {:.0} s · peak {} bodies  [Tab] back",
            points.len(),
            tracker.elapsed_seconds(),
            peak,
        );
    }
}

/// Draw the axis frame and the bodies-vs-time polyline with gizmos
pub fn draw_chart(tracker: Res<RunTracker>, world: Res<WorldState>, mut gizmos: Gizmos) {
    let half_w = world.bounds.width / 2.0 - MARGIN;
    let half_h = world.bounds.height / 2.0 - MARGIN;

    // axis frame
    let corners = [
        Vec2::new(-half_w, -half_h),
        Vec2::new(half_w, -half_h),
        Vec2::new(half_w, half_h),
        Vec2::new(-half_w, half_h),
    ];
    for i in 0..4 {
        gizmos.line_2d(corners[i], corners[(i + 1) % 4], FRAME_COLOR);
    }

    let points = tracker.points();
    if points.len() < 2 {
        return;
    }

    let t_max = points.last().map(|p| p.t).unwrap_or(1.0).max(1.0);
    let y_max = points.iter().map(|p| p.bodies).max().unwrap_or(1).max(1) as f64;

    let project = |t: f64, bodies: usize| -> Vec2 {
        let fx = (t / t_max) as f32;
        let fy = bodies as f64 / y_max;
        Vec2::new(
            -half_w + fx * 2.0 * half_w,
            -half_h + fy as f32 * 2.0 * half_h,
        )
    };

    for pair in points.windows(2) {
        let a = project(pair[0].t, pair[0].bodies);
        let b = project(pair[1].t, pair[1].bodies);
        gizmos.line_2d(a, b, CHART_COLOR);
    }
}
