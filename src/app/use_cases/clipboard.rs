//! Use-Case: Selektion in die System-Zwischenablage exportieren.

use super::selection::clipboard_text;
use crate::app::AppState;

/// Schreibt alle selektierten Einträge als Text in die Zwischenablage.
///
/// Ist die Zwischenablage nicht verfügbar (z.B. Wayland ohne Portal,
/// Headless-Session), wird der Text stattdessen auf die Konsole
/// ausgegeben — der Event schlägt nie fehl.
pub fn copy_selection(state: &mut AppState) {
    let text = clipboard_text(&state.selection);
    let entry_count = state.selection.len();

    match write_to_clipboard(&text) {
        Ok(()) => {
            log::info!("Selektion kopiert ({entry_count} Einträge)");
            state.ui.status_message =
                Some(format!("Selektion kopiert ({entry_count} Einträge)"));
        }
        Err(e) => {
            log::warn!("Zwischenablage nicht verfügbar: {e}. Ausgabe auf Konsole.");
            println!("{text}");
            state.ui.status_message =
                Some("Zwischenablage nicht verfügbar — Ausgabe auf Konsole".to_string());
        }
    }
}

fn write_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
