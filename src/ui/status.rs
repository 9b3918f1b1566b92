//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(mesh) = &state.mesh {
                ui.label(format!(
                    "{} | Vertices: {} | Faces: {}",
                    mesh.name,
                    mesh.vertex_count(),
                    mesh.face_count()
                ));
            } else {
                ui.label("No file loaded");
            }

            ui.separator();

            ui.label(format!(
                "Pick Mode: {}",
                if state.view.pick_mode { "ON" } else { "OFF" }
            ));

            ui.separator();

            ui.label(format!(
                "Multi-select: {}",
                if state.selection.multi_select {
                    "ON"
                } else {
                    "OFF"
                }
            ));

            ui.separator();

            let selected_count = state.selection.len();
            if selected_count > 0 {
                let example_id = state
                    .selection
                    .picks
                    .keys()
                    .next()
                    .copied()
                    .unwrap_or_default();
                ui.label(format!(
                    "Selected Vertices: {} (z.B. {})",
                    selected_count, example_id
                ));
            } else {
                ui.label("Selected Vertices: 0");
            }

            // Statusnachricht (z.B. Pick-Ergebnis, Clipboard-Hinweis)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
