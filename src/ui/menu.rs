//! Top-Menü (File, Selection, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Selection", |ui| {
                let has_selection = !state.selection.is_empty();

                let mut pick_mode = state.view.pick_mode;
                if ui.checkbox(&mut pick_mode, "Pick Mode (P)").changed() {
                    events.push(AppIntent::PickModeToggled);
                    ui.close();
                }

                let mut multi_select = state.selection.multi_select;
                if ui.checkbox(&mut multi_select, "Multi-select (M)").changed() {
                    events.push(AppIntent::MultiSelectToggled);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(has_selection, egui::Button::new("Clear (R)"))
                    .clicked()
                {
                    events.push(AppIntent::ClearSelectionRequested);
                    ui.close();
                }

                if ui.button("Copy to Clipboard (C)").clicked() {
                    events.push(AppIntent::CopySelectionRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
