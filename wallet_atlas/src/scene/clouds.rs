//! Holder clouds: ingest_holders system, AtlasState, HolderPoint component.

use bevy::prelude::*;

use crate::config::AtlasConfig;
use crate::data::{init_holder_channel, CollectionKind, HolderChannel};
use crate::layout::{generate_layout, LayoutSettings};
use crate::render::RendererResource;
use crate::scene::materials;

const CORE_RADIUS: f32 = 18.0;
const CAMERA_FAR: f32 = 4000.0;

/// Counters from the most recent load cycle, for the HUD.
#[derive(Resource, Default)]
pub struct AtlasState {
    pub holders_a: usize,
    pub holders_b: usize,
    pub shared: usize,
    pub skipped_points: usize,
    pub load_cycles: u64,
}

/// Marker + data for holder sphere entities. Amounts are present per side:
/// a shared holder carries both, a single-ledger holder carries one.
#[derive(Component)]
pub struct HolderPoint {
    pub kind: CollectionKind,
    pub address: String,
    pub amount_a: Option<f64>,
    pub amount_b: Option<f64>,
    pub world_radius: f32,
}

/// Marker for the central core sphere.
#[derive(Component)]
pub struct CoreSphere;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(AtlasState::default());
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_xyz(0., 60., 320.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(400., 800., 400.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
    });
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(CORE_RADIUS))),
        MeshMaterial3d(materials::core_material(&mut materials_res)),
        Transform::default(),
        CoreSphere,
    ));
}

/// Drains the holder channel. A payload replaces the existing clouds
/// wholesale: points are never mutated in place across load cycles.
#[allow(clippy::too_many_arguments)]
pub fn ingest_holders(
    mut commands: Commands,
    channel: Res<HolderChannel>,
    renderer: Res<RendererResource>,
    settings: Res<LayoutSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
    mut state: ResMut<AtlasState>,
    existing: Query<Entity, With<HolderPoint>>,
) {
    let Ok(sets) = channel.0.try_recv() else {
        return;
    };

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let layout = generate_layout(&sets, &settings);
    eprintln!(
        "orrery: placed {} points ({} skipped)",
        layout.total_points(),
        layout.total_skipped()
    );

    renderer.0.spawn_cloud(
        &mut commands,
        &mut meshes,
        &mut materials_res,
        CollectionKind::Shared,
        &layout.shared,
    );
    renderer.0.spawn_cloud(
        &mut commands,
        &mut meshes,
        &mut materials_res,
        CollectionKind::LedgerA,
        &layout.ledger_a,
    );
    renderer.0.spawn_cloud(
        &mut commands,
        &mut meshes,
        &mut materials_res,
        CollectionKind::LedgerB,
        &layout.ledger_b,
    );

    state.holders_a = sets.ledger_a.len();
    state.holders_b = sets.ledger_b.len();
    state.shared = sets.shared.len();
    state.skipped_points = layout.total_skipped();
    state.load_cycles += 1;
}

/// `R` starts a fresh load cycle from the configured sources. The old clouds
/// stay up until the new payload arrives.
pub fn reload_system(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<AtlasConfig>,
    mut channel: ResMut<HolderChannel>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    eprintln!("orrery: reloading holder data");
    *channel = init_holder_channel(config.clone());
}
