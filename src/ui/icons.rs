//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Info icon, on the facts button
pub const INFO: &str = egui_phosphor::regular::INFO;
/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Sun icon
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Planet/globe icon
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
/// Asteroid icon
pub const ASTEROID: &str = egui_phosphor::regular::ASTERISK;
/// Loading/clock icon
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
/// Warning/alert icon
pub const WARNING: &str = egui_phosphor::regular::WARNING;
