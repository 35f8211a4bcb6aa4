//! UI module providing the egui overlay.

pub mod facts_panel;
pub mod icons;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use facts_panel::{FactsPanel, PanelClick};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FactsPanel>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                facts_panel::facts_panel_system
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
