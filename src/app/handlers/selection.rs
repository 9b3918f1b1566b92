//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Ray;

/// Löst einen Pick-Strahl auf und schaltet die Selektion fort.
pub fn pick_vertex(state: &mut AppState, ray: Ray) {
    use_cases::selection::pick_vertex(state, ray);
}

/// Schaltet den Multi-Select-Modus um (Selektion bleibt unverändert).
pub fn toggle_multi_select(state: &mut AppState) {
    use_cases::selection::toggle_multi_select(state);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Schreibt die aktuelle Selektion in die System-Zwischenablage.
pub fn copy_to_clipboard(state: &mut AppState) {
    use_cases::clipboard::copy_selection(state);
}
