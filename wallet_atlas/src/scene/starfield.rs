//! Decorative starfield backdrop, well outside the holder shells.
//!
//! Star scatter is random on purpose; the holder layout itself stays
//! deterministic.

use bevy::prelude::*;
use rand::Rng;

use crate::scene::materials;

const STAR_COUNT: usize = 600;
const MIN_RADIUS: f32 = 1200.0;
const MAX_RADIUS: f32 = 2400.0;

#[derive(Component)]
pub struct Star;

pub fn starfield_plugin(app: &mut App) {
    app.add_systems(Startup, spawn_starfield);
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(1.0));
    let tiers: Vec<Handle<StandardMaterial>> = [0.4, 0.7, 1.0]
        .iter()
        .map(|&b| materials::star_material(&mut materials_res, b))
        .collect();

    let mut rng = rand::thread_rng();
    for _ in 0..STAR_COUNT {
        let dir = random_unit_vector(&mut rng);
        let radius = rng.gen_range(MIN_RADIUS..MAX_RADIUS);
        let scale = rng.gen_range(1.5f32..4.0);
        let material = tiers[rng.gen_range(0..tiers.len())].clone();

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(dir * radius).with_scale(Vec3::splat(scale)),
            Star,
        ));
    }
}

// Rejection sampling inside the unit ball keeps directions unbiased.
fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-4 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}
