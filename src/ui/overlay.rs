//! Selektions-Overlay oben links im Viewport.

use crate::app::use_cases::selection::overlay_text;
use crate::app::AppState;

/// Rendert die Selektion als Text-Overlay über dem Viewport.
pub fn render_selection_overlay(ctx: &egui::Context, state: &AppState) {
    if state.mesh.is_none() {
        return;
    }

    let text = overlay_text(&state.selection);
    let color = color32(state.options.overlay_color);

    egui::Area::new(egui::Id::new("selection_overlay"))
        .anchor(egui::Align2::LEFT_TOP, [12.0, 36.0])
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(text).monospace().color(color));
        });
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
