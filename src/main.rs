//! NEO Orrery - toy solar system with near-Earth objects
//!
//! Planets circle the Sun on wall-clock time; a week of NASA NEO feed data
//! is plotted as static markers.

use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use bevy_egui::EguiPlugin;

use neo_orrery::animation::AnimationPlugin;
use neo_orrery::camera::{CameraPlugin, DEFAULT_VIEWPORT};
use neo_orrery::neo::{NeoFeedConfig, NeoPlugin};
use neo_orrery::scene::ScenePlugin;
use neo_orrery::ui::UiPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "NEO Orrery".into(),
                    resolution: WindowResolution::new(
                        DEFAULT_VIEWPORT.0 as u32,
                        DEFAULT_VIEWPORT.1 as u32,
                    ),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "info,wgpu=error,naga=warn".into(),
                ..default()
            }),
    )
    .add_plugins(EguiPlugin::default())
    .insert_resource(ClearColor(Color::BLACK));

    // Insert resources before plugins that depend on them
    match NeoFeedConfig::from_env() {
        Ok(config) => {
            app.insert_resource(config);
        }
        Err(err) => {
            error!("Invalid NEO feed configuration, using defaults: {err}");
        }
    }

    app.add_plugins((ScenePlugin, CameraPlugin, AnimationPlugin, NeoPlugin, UiPlugin))
        .run();
}
