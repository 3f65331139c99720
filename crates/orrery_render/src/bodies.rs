use bevy::prelude::*;
use orrery_core::Rgb;
use orrery_sim::world::WorldState;

use super::view::sim_to_render;

/// Marker tying a render entity to an index in the simulation's body list
#[derive(Component)]
pub struct BodyVisual {
    pub index: usize,
}

/// Shared unit-circle mesh; each body's radius is applied as transform scale
#[derive(Resource)]
pub struct BodyMesh(pub Handle<Mesh>);

pub fn setup_body_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(BodyMesh(meshes.add(Circle::new(1.0))));
}

fn to_bevy(c: Rgb) -> Color {
    Color::srgb_u8(c.0, c.1, c.2)
}

/// Rebuild the body entities whenever spawns or merges change the body count.
/// Each body gets its own material so merge tints can differ per body.
pub fn sync_body_entities(
    mut commands: Commands,
    world: Res<WorldState>,
    mesh: Res<BodyMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    query: Query<(Entity, &MeshMaterial2d<ColorMaterial>), With<BodyVisual>>,
) {
    if query.iter().count() == world.body_count() {
        return;
    }

    for (entity, material) in &query {
        materials.remove(&material.0);
        commands.entity(entity).despawn();
    }

    for (index, body) in world.bodies.iter().enumerate() {
        let p = sim_to_render(&world.bounds, body.x, body.y);
        commands.spawn((
            Mesh2d(mesh.0.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(to_bevy(body.render_color())))),
            Transform::from_translation(p.extend(0.0)).with_scale(Vec3::splat(body.radius)),
            BodyVisual { index },
        ));
    }
}

/// Sync positions, radii, and tint from simulation state each frame
pub fn update_body_visuals(
    world: Res<WorldState>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&BodyVisual, &mut Transform, &MeshMaterial2d<ColorMaterial>)>,
) {
    for (visual, mut transform, material) in &mut query {
        let Some(body) = world.bodies.get(visual.index) else {
            continue;
        };
        let p = sim_to_render(&world.bounds, body.x, body.y);
        transform.translation.x = p.x;
        transform.translation.y = p.y;
        transform.scale = Vec3::splat(body.radius);

        let tint = to_bevy(body.render_color());
        if let Some(mat) = materials.get_mut(&material.0) {
            if mat.color != tint {
                mat.color = tint;
            }
        }
    }
}
