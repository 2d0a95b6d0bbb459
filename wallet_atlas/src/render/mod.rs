//! Renderer traits and default implementations.

mod sphere_cloud;

use bevy::prelude::*;

use crate::data::CollectionKind;
use crate::layout::LayoutOutcome;

pub use sphere_cloud::{SphereCloudRenderer, SphereCloudSettings};

pub trait HolderRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}
    fn spawn_cloud(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
        kind: CollectionKind,
        outcome: &LayoutOutcome,
    );
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn HolderRenderer>);

impl RendererResource {
    pub fn new(renderer: impl HolderRenderer) -> Self {
        Self(Box::new(renderer))
    }
}
