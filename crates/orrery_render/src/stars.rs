use bevy::prelude::*;
use orrery_sim::world::WorldState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::view::sim_to_render;

/// Marker for background star entities
#[derive(Component)]
pub struct BgStar;

/// Scatter the decorative starfield once at startup.
/// Seeded off the sim seed (offset stream) so a layout repeats per seed.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    world: Res<WorldState>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(world.config.seed.wrapping_add(1));
    let mesh = meshes.add(Circle::new(1.0));
    let material = materials.add(ColorMaterial::from(Color::WHITE));

    for _ in 0..world.config.star_count {
        let x = rng.gen_range(0.0..world.bounds.width);
        let y = rng.gen_range(0.0..world.bounds.height);
        let r = rng.gen_range(1..=3) as f32;
        let p = sim_to_render(&world.bounds, x, y);
        commands.spawn((
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(p.extend(-1.0)).with_scale(Vec3::splat(r)),
            BgStar,
        ));
    }

    info!("Scattered {} background stars", world.config.star_count);
}
