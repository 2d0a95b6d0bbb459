//! SDK entry points and builder for composing the wallet atlas app.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::camera::fly_camera_plugin;
use crate::config::{self, AtlasConfig};
use crate::data::init_holder_channel;
use crate::layout::LayoutSettings;
use crate::render::{HolderRenderer, RendererResource, SphereCloudRenderer};
use crate::scene::{ingest_holders, reload_system, setup_scene, starfield_plugin};
use crate::ui::{hud_plugin, inspector_plugin};

/// Builder for constructing an Orrery app with customizable plugins.
pub struct WalletAtlasBuilder {
    config: Option<AtlasConfig>,
    fixture: Option<PathBuf>,
    layout: LayoutSettings,
    renderer: Option<Box<dyn HolderRenderer>>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_fly_camera: bool,
    enable_hud: bool,
    enable_inspector: bool,
    enable_starfield: bool,
}

impl Default for WalletAtlasBuilder {
    fn default() -> Self {
        Self {
            config: None,
            fixture: None,
            layout: LayoutSettings::default(),
            renderer: None,
            window_title: "Orrery".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.02, 0.02, 0.05),
            enable_fly_camera: true,
            enable_hud: true,
            enable_inspector: true,
            enable_starfield: true,
        }
    }
}

impl WalletAtlasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit source configuration instead of the environment.
    pub fn config(mut self, config: AtlasConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replay a recorded fixture instead of fetching (overrides any fixture
    /// path in the configuration).
    pub fn fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture = Some(path.into());
        self
    }

    /// Override the shell and weight parameters.
    pub fn layout_settings(mut self, layout: LayoutSettings) -> Self {
        self.layout = layout;
        self
    }

    /// Provide a custom holder renderer implementation.
    pub fn renderer(mut self, renderer: impl HolderRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_fly_camera(mut self) -> Self {
        self.enable_fly_camera = false;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    pub fn disable_inspector(mut self) -> Self {
        self.enable_inspector = false;
        self
    }

    pub fn disable_starfield(mut self) -> Self {
        self.enable_starfield = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let mut config = self.config.unwrap_or_else(config::atlas_config);
        if self.fixture.is_some() {
            config.fixture = self.fixture;
        }
        let channel = init_holder_channel(config.clone());
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(SphereCloudRenderer::default()));

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(config)
        .insert_resource(self.layout)
        .insert_resource(channel)
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (ingest_holders, reload_system));

        renderer.setup(&mut app);
        app.insert_resource(RendererResource(renderer));

        if self.enable_fly_camera {
            app.add_plugins(fly_camera_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if self.enable_inspector {
            app.add_plugins(inspector_plugin);
        }
        if self.enable_starfield {
            app.add_plugins(starfield_plugin);
        }

        app
    }
}
