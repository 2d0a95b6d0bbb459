use bevy::prelude::*;

use crate::data::CollectionKind;
use crate::layout::{LayoutOutcome, PointSource};
use crate::render::HolderRenderer;
use crate::scene::materials;
use crate::scene::HolderPoint;

#[derive(Clone, Debug)]
pub struct SphereCloudSettings {
    /// World radius per unit of visual weight.
    pub point_scale: f32,
}

impl Default for SphereCloudSettings {
    fn default() -> Self {
        Self { point_scale: 0.6 }
    }
}

/// Default renderer: one emissive sphere per placed holder, sharing a unit
/// mesh and scaling per point.
#[derive(Default)]
pub struct SphereCloudRenderer {
    pub settings: SphereCloudSettings,
}

impl HolderRenderer for SphereCloudRenderer {
    fn spawn_cloud(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials_res: &mut ResMut<Assets<StandardMaterial>>,
        kind: CollectionKind,
        outcome: &LayoutOutcome,
    ) {
        if outcome.points.is_empty() {
            return;
        }

        let mesh = meshes.add(Sphere::new(1.0));
        for point in &outcome.points {
            let world_radius = point.weight * self.settings.point_scale;
            let material = materials::holder_material(materials_res, kind, point.source.holding());

            let (amount_a, amount_b) = match &point.source {
                PointSource::Ledger(entry) => match kind {
                    CollectionKind::LedgerB => (None, Some(entry.amount)),
                    _ => (Some(entry.amount), None),
                },
                PointSource::Shared(entry) => (Some(entry.amount_a), Some(entry.amount_b)),
            };

            commands.spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_xyz(point.x, point.y, point.z)
                    .with_scale(Vec3::splat(world_radius)),
                HolderPoint {
                    kind,
                    address: point.source.address().to_string(),
                    amount_a,
                    amount_b,
                    world_radius,
                },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LedgerEntry;
    use crate::layout::{place_ledger, LayoutSettings};
    use bevy::ecs::system::SystemState;

    #[test]
    fn spawns_one_entity_per_placed_point() {
        let entries: Vec<LedgerEntry> = (0..8)
            .map(|i| LedgerEntry {
                address: format!("w{i}"),
                amount: 1_000.0 * (i + 1) as f64,
            })
            .collect();
        let settings = LayoutSettings::default();
        let outcome = place_ledger(&entries, &settings.ledger_a, &settings.weight);

        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>();

        let renderer = SphereCloudRenderer::default();
        {
            let world = app.world_mut();
            let mut state: SystemState<(
                Commands,
                ResMut<Assets<Mesh>>,
                ResMut<Assets<StandardMaterial>>,
            )> = SystemState::new(world);
            let (mut commands, mut meshes, mut materials_res) = state.get_mut(world);
            renderer.spawn_cloud(
                &mut commands,
                &mut meshes,
                &mut materials_res,
                CollectionKind::LedgerA,
                &outcome,
            );
            state.apply(world);
        }

        let world = app.world_mut();
        let spawned: Vec<&HolderPoint> =
            world.query::<&HolderPoint>().iter(world).collect();
        assert_eq!(spawned.len(), 8);
        assert!(spawned.iter().all(|p| p.kind == CollectionKind::LedgerA));
        assert!(spawned.iter().all(|p| p.world_radius > 0.0));
    }
}
