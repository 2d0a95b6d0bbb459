//! Wallet inspector: hover a holder sphere to see its address and holdings.
//!
//! Uses manual ray-sphere intersection instead of Bevy's mesh picking to
//! avoid input absorption conflicts with bevy_egui.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::config::AtlasConfig;
use crate::data::CollectionKind;
use crate::scene::HolderPoint;

/// Tracks the hovered entity and its original material for highlight restore.
#[derive(Resource, Default)]
pub struct HoveredHolder {
    pub entity: Option<Entity>,
    original_material: Option<Handle<StandardMaterial>>,
}

pub fn inspector_plugin(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
    app.init_resource::<HoveredHolder>()
        .add_systems(Update, (hover_raycast_system, tooltip_panel_system));
}

#[allow(clippy::too_many_arguments)]
fn hover_raycast_system(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut contexts: EguiContexts,
    holders: Query<(Entity, &GlobalTransform, &HolderPoint)>,
    material_query: Query<&MeshMaterial3d<StandardMaterial>>,
    mut hovered: ResMut<HoveredHolder>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if contexts.ctx_mut().is_pointer_over_area() {
        clear_hover(&mut commands, &mut hovered);
        return;
    }

    let Some(cursor_pos) = window.cursor_position() else {
        clear_hover(&mut commands, &mut hovered);
        return;
    };
    let Ok((camera, cam_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_transform, cursor_pos) else {
        return;
    };

    let ray_origin = ray.origin;
    let ray_dir: Vec3 = *ray.direction;

    let mut best_hit: Option<(Entity, f32)> = None;
    for (entity, transform, point) in &holders {
        let center = transform.translation();
        if let Some(dist) = ray_sphere_intersect(ray_origin, ray_dir, center, point.world_radius) {
            if best_hit.is_none_or(|(_, d)| dist < d) {
                best_hit = Some((entity, dist));
            }
        }
    }

    let Some((hit_entity, _)) = best_hit else {
        clear_hover(&mut commands, &mut hovered);
        return;
    };

    if hovered.entity == Some(hit_entity) {
        return;
    }
    clear_hover(&mut commands, &mut hovered);

    let Ok(current_material) = material_query.get(hit_entity) else {
        return;
    };
    hovered.entity = Some(hit_entity);
    hovered.original_material = Some(current_material.0.clone());

    if let Some(mat_data) = materials.get(&current_material.0) {
        let mut highlight = mat_data.clone();
        highlight.emissive = LinearRgba::rgb(0.9, 0.8, 0.2);
        let handle = materials.add(highlight);
        commands.entity(hit_entity).insert(MeshMaterial3d(handle));
    }
}

fn ray_sphere_intersect(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    if t > 0.0 {
        return Some(t);
    }
    // Origin inside the sphere still counts as a hover.
    let t_exit = -b + disc.sqrt();
    if t_exit > 0.0 {
        return Some(0.0);
    }
    None
}

fn clear_hover(commands: &mut Commands, hovered: &mut HoveredHolder) {
    if let (Some(entity), Some(original)) =
        (hovered.entity.take(), hovered.original_material.take())
    {
        if let Some(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.insert(MeshMaterial3d(original));
        }
    }
}

fn tooltip_panel_system(
    mut contexts: EguiContexts,
    windows: Query<&Window>,
    hovered: Res<HoveredHolder>,
    config: Res<AtlasConfig>,
    holders: Query<&HolderPoint>,
) {
    let Some(entity) = hovered.entity else {
        return;
    };
    let Ok(point) = holders.get(entity) else {
        return;
    };
    let cursor = windows
        .get_single()
        .ok()
        .and_then(|w| w.cursor_position())
        .unwrap_or(Vec2::ZERO);

    egui::Window::new("wallet_tooltip")
        .fixed_pos([cursor.x + 16.0, cursor.y + 16.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 220))
                .inner_margin(egui::Margin::same(10)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(
                egui::RichText::new(kind_label(point.kind, &config))
                    .size(13.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.label(abbreviate(&point.address, 8, 6));
            ui.add_space(4.0);

            if let Some(amount) = point.amount_a {
                ui.label(format!(
                    "{}  {}",
                    config.token_a.label,
                    format_amount(amount)
                ));
            }
            if let Some(amount) = point.amount_b {
                ui.label(format!(
                    "{}  {}",
                    config.token_b.label,
                    format_amount(amount)
                ));
            }
        });
}

fn kind_label(kind: CollectionKind, config: &AtlasConfig) -> String {
    match kind {
        CollectionKind::LedgerA => format!("{} holder", config.token_a.label),
        CollectionKind::LedgerB => format!("{} holder", config.token_b.label),
        CollectionKind::Shared => "Shared holder".to_string(),
    }
}

fn abbreviate(s: &str, prefix_len: usize, suffix_len: usize) -> String {
    if s.len() <= prefix_len + suffix_len + 2 {
        return s.to_string();
    }
    format!("{}..{}", &s[..prefix_len], &s[s.len() - suffix_len..])
}

fn format_amount(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{n:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_sphere_ahead_and_misses_sphere_behind() {
        let center = Vec3::new(0.0, 0.0, -10.0);
        let hit = ray_sphere_intersect(Vec3::ZERO, Vec3::NEG_Z, center, 2.0);
        assert!(hit.is_some());
        assert!((hit.unwrap() - 8.0).abs() < 1e-4);

        let behind = ray_sphere_intersect(Vec3::ZERO, Vec3::Z, center, 2.0);
        assert!(behind.is_none());
    }

    #[test]
    fn ray_from_inside_reports_zero_distance() {
        let hit = ray_sphere_intersect(Vec3::ZERO, Vec3::X, Vec3::ZERO, 1.0);
        assert_eq!(hit, Some(0.0));
    }

    #[test]
    fn abbreviate_keeps_short_addresses_intact() {
        assert_eq!(abbreviate("wallet1", 8, 6), "wallet1");
        assert_eq!(
            abbreviate("u6pj8dtqupfnfmwhbgfulq4u4egjdiyykjvesynxq2w", 8, 6),
            "u6pj8dtq..ynxq2w"
        );
    }

    #[test]
    fn amounts_format_by_magnitude() {
        assert_eq!(format_amount(53_353_226.72), "53.35M");
        assert_eq!(format_amount(18_023.0), "18.0K");
        assert_eq!(format_amount(42.5), "42.50");
    }
}
