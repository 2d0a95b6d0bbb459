//! HUD overlay: holder counts, jetpack fuel, FPS counter.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::camera::FlyCamera;
use crate::config::AtlasConfig;
use crate::scene::AtlasState;

pub fn hud_plugin(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
    app.add_plugins(FrameTimeDiagnosticsPlugin)
        .add_systems(Update, hud_overlay_system);
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    state: Option<Res<AtlasState>>,
    config: Res<AtlasConfig>,
    cameras: Query<&FlyCamera>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let Some(state) = state else {
        return;
    };

    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    egui::Window::new("Wallet Atlas")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            if state.load_cycles == 0 {
                ui.label(
                    egui::RichText::new("Loading holder data…")
                        .size(14.0)
                        .color(egui::Color32::from_rgb(100, 220, 180)),
                );
                return;
            }

            ui.label(
                egui::RichText::new("Holder constellation")
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(4.0);

            ui.label(format!("{}  {}", config.token_a.label, state.holders_a));
            ui.label(format!("{}  {}", config.token_b.label, state.holders_b));
            ui.label(format!("Shared  {}", state.shared));
            if state.skipped_points > 0 {
                ui.label(
                    egui::RichText::new(format!("Skipped points  {}", state.skipped_points))
                        .color(egui::Color32::from_rgb(200, 180, 100)),
                );
            }
            ui.add_space(4.0);

            if let Ok(fly) = cameras.get_single() {
                let fill = fly.jetpack.fuel / fly.jetpack.max_fuel;
                ui.label("Jetpack (hold Shift)");
                ui.add(
                    egui::ProgressBar::new(fill)
                        .text(format!("{:.0}%", fill * 100.0))
                        .fill(egui::Color32::from_rgb(80, 180, 140)),
                );
                ui.add_space(4.0);
            }

            ui.separator();
            ui.label(format!("Load cycles  {}", state.load_cycles));
            ui.label(format!("FPS  {fps:.0}"));
            ui.label(
                egui::RichText::new("WASD to move, drag mouse to look around")
                    .size(11.0)
                    .color(egui::Color32::from_rgb(120, 120, 140)),
            );
            ui.label(
                egui::RichText::new("Hold Shift for jetpack boost, R to reload")
                    .size(11.0)
                    .color(egui::Color32::from_rgb(120, 120, 140)),
            );
        });
}
