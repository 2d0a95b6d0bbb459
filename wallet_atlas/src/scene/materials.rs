//! Shared material and color helpers for holder spheres, the core, and stars.

use crate::data::CollectionKind;
use bevy::prelude::*;

// Holdings at or above this saturate the brightness ramp.
const BRIGHTNESS_PIVOT: f64 = 10_000_000.0;

pub fn collection_base_color(kind: CollectionKind) -> Color {
    match kind {
        CollectionKind::LedgerA => Color::srgb(0.1, 0.7, 0.1),
        CollectionKind::LedgerB => Color::srgb(0.15, 0.15, 0.75),
        CollectionKind::Shared => Color::srgb(0.9, 0.9, 0.9),
    }
}

/// Holder sphere material: the collection's base color, brightened toward
/// full intensity as the holding approaches the pivot, with a matching glow.
pub fn holder_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
    kind: CollectionKind,
    amount: f64,
) -> Handle<StandardMaterial> {
    let normalized = (amount / BRIGHTNESS_PIVOT).clamp(0.0, 1.0) as f32;
    let brightness = 0.3 + 0.7 * normalized;

    let lin = collection_base_color(kind).to_linear();
    let base = Color::linear_rgb(
        lin.red * brightness,
        lin.green * brightness,
        lin.blue * brightness,
    );
    let glow = Color::linear_rgb(
        lin.red * brightness * 0.8,
        lin.green * brightness * 0.8,
        lin.blue * brightness * 0.8,
    );

    materials.add(StandardMaterial {
        base_color: base,
        emissive: glow.into(),
        ..default()
    })
}

/// The white glowing core sphere at the origin.
pub fn core_material(materials: &mut ResMut<Assets<StandardMaterial>>) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::rgb(1.2, 1.2, 1.2),
        ..default()
    })
}

/// Unlit star dot for the backdrop; `brightness` in 0..=1.
pub fn star_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
    brightness: f32,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgb(brightness, brightness, brightness * 0.95),
        unlit: true,
        ..default()
    })
}
