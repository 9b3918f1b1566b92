//! Handler für Kamera- und Viewport-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Richtet die Kamera neu auf das geladene Mesh aus.
pub fn reset_camera(state: &mut AppState) {
    use_cases::view::reset_camera(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::view::zoom_step_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::view::zoom_step_out(state);
}

/// Setzt die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Dreht die Kamera um das Ziel.
pub fn orbit(state: &mut AppState, delta: Vec2) {
    use_cases::view::orbit_camera(state, delta);
}

/// Verschiebt das Kamera-Ziel in der Bildebene.
pub fn pan(state: &mut AppState, delta: Vec2) {
    use_cases::view::pan_camera(state, delta);
}

/// Zoomt die Kamera um einen Faktor.
pub fn zoom_towards(state: &mut AppState, factor: f32) {
    use_cases::view::zoom_camera(state, factor);
}

/// Schaltet den Pick-Modus um.
pub fn toggle_pick_mode(state: &mut AppState) {
    use_cases::view::toggle_pick_mode(state);
}
