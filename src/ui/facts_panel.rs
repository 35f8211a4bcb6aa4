//! Planet facts overlay.
//!
//! Hidden until the info button is pressed. Closed by its X button or by a
//! click on the dimmed backdrop around it; clicks inside the panel leave it
//! open.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::bodies::{CelestialBodyDescriptor, PLANETS};
use crate::neo::NeoLoadStatus;

/// Where a click landed, from the panel's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelClick {
    /// The always-visible info button.
    OpenButton,
    /// The X button inside the panel.
    CloseButton,
    /// The backdrop itself, outside the panel content.
    Backdrop,
    /// Anywhere inside the panel content.
    Content,
}

/// Visibility of the facts panel.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FactsPanel {
    pub visible: bool,
}

impl FactsPanel {
    /// Apply a click. Returns whether visibility changed.
    pub fn handle(&mut self, click: PanelClick) -> bool {
        let visible = match click {
            PanelClick::OpenButton => true,
            PanelClick::CloseButton | PanelClick::Backdrop => false,
            PanelClick::Content => self.visible,
        };
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

/// Colors for the panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const BUTTON_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 230);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const MUTED: Color32 = Color32::from_rgb(140, 140, 150);
    pub const WARNING: Color32 = Color32::from_rgb(221, 170, 85);
}

/// System that renders the info button and, when open, the facts panel.
pub fn facts_panel_system(
    mut contexts: EguiContexts,
    mut panel: ResMut<FactsPanel>,
    status: Res<NeoLoadStatus>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut clicks = Vec::new();

    egui::Area::new(egui::Id::new("facts_button"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(ctx, |ui| {
            let button = egui::Button::new(
                egui::RichText::new(format!("{} Planet facts", icons::INFO)).color(colors::TEXT),
            )
            .fill(colors::BUTTON_BG);
            if ui.add(button).clicked() {
                clicks.push(PanelClick::OpenButton);
            }
        });

    if panel.visible {
        let modal = egui::Modal::new(egui::Id::new("facts_panel")).show(ctx, |ui| {
            ui.set_min_width(360.0);
            let mut close = false;

            ui.horizontal(|ui| {
                ui.heading(format!("{} The Solar System", icons::SUN));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    close = ui.button(icons::CLOSE).on_hover_text("Close").clicked();
                });
            });
            ui.separator();

            render_planet_table(ui);

            ui.separator();
            render_neo_status(ui, &status);

            close
        });

        if modal.inner {
            clicks.push(PanelClick::CloseButton);
        } else if modal.backdrop_response.clicked() {
            clicks.push(PanelClick::Backdrop);
        }
    }

    for click in clicks {
        if panel.handle(click) {
            debug!("Facts panel {:?} -> visible={}", click, panel.visible);
        }
    }
}

/// One row per registry planet: swatch, name, size and distance.
fn render_planet_table(ui: &mut egui::Ui) {
    egui::Grid::new("planet_facts")
        .num_columns(4)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("");
            ui.strong("Planet");
            ui.strong("Size (Earth = 1)");
            ui.strong("Distance");
            ui.end_row();

            for planet in &PLANETS {
                render_planet_row(ui, planet);
                ui.end_row();
            }
        });
}

fn render_planet_row(ui: &mut egui::Ui, planet: &CelestialBodyDescriptor) {
    let (r, g, b) = planet.color.channels();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 5.0, egui::Color32::from_rgb(r, g, b));

    ui.label(format!("{} {}", icons::PLANET, planet.name));
    ui.label(format!("{:.2}", planet.display_size));
    ui.label(format!("{:.0}", planet.orbit_distance));
}

fn render_neo_status(ui: &mut egui::Ui, status: &NeoLoadStatus) {
    let text = match status {
        NeoLoadStatus::Pending => {
            egui::RichText::new(format!("{} Loading near-Earth objects...", icons::CLOCK))
                .color(colors::MUTED)
        }
        NeoLoadStatus::Loaded { markers, .. } => egui::RichText::new(format!(
            "{} {} near-Earth objects plotted",
            icons::ASTEROID,
            markers
        ))
        .color(colors::TEXT),
        NeoLoadStatus::Failed(_) => egui::RichText::new(format!(
            "{} Near-Earth object data unavailable",
            icons::WARNING
        ))
        .color(colors::WARNING),
    };
    ui.label(text);
}
