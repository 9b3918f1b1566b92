//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Belegung: `P` Pick-Modus, `M` Multi-Select, `R` Selektion aufheben,
/// `C` Selektion kopieren, `Escape` Selektion aufheben, `Ctrl+O` Öffnen.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, has_selection: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_p, key_m, key_r, key_c, key_o, key_escape) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::P),
            i.key_pressed(egui::Key::M),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::C),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_o {
        events.push(AppIntent::OpenFileRequested);
    }

    if key_p && !modifiers.command {
        events.push(AppIntent::PickModeToggled);
    }

    if key_m && !modifiers.command {
        events.push(AppIntent::MultiSelectToggled);
    }

    if key_r && !modifiers.command {
        events.push(AppIntent::ClearSelectionRequested);
    }

    if key_c && !modifiers.command {
        events.push(AppIntent::CopySelectionRequested);
    }

    if key_escape && has_selection {
        events.push(AppIntent::ClearSelectionRequested);
    }

    events
}
