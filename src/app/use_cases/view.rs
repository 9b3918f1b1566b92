//! Use-Cases für Kamera und Ansicht.

use crate::app::AppState;
use crate::core::OrbitCamera;
use glam::Vec2;

/// Empfindlichkeit der Orbit-Drehung (Radiant pro Pixel).
const ORBIT_SENSITIVITY: f32 = 0.008;

/// Richtet die Kamera neu auf das geladene Mesh aus.
pub fn reset_camera(state: &mut AppState) {
    let Some(mesh) = state.mesh.as_deref() else {
        return;
    };
    let mut camera = OrbitCamera::new();
    if let Some((min, max)) = mesh.bounds() {
        camera.frame_bounds(min, max);
    }
    state.view.camera = camera;
}

/// Zoomt stufenweise hinein (Menü / Shortcut).
pub fn zoom_step_in(state: &mut AppState) {
    state.view.camera.zoom_by(1.0 / OrbitCamera::ZOOM_STEP);
}

/// Zoomt stufenweise heraus (Menü / Shortcut).
pub fn zoom_step_out(state: &mut AppState) {
    state.view.camera.zoom_by(OrbitCamera::ZOOM_STEP);
}

/// Dreht die Kamera um das Orbit-Ziel (Pixel-Delta der Maus).
pub fn orbit_camera(state: &mut AppState, delta_px: Vec2) {
    state.view.camera.orbit(
        -delta_px.x * ORBIT_SENSITIVITY,
        delta_px.y * ORBIT_SENSITIVITY,
    );
}

/// Verschiebt das Kamera-Ziel in der Bildebene (Pixel-Delta der Maus).
pub fn pan_camera(state: &mut AppState, delta_px: Vec2) {
    let viewport_height = state.view.viewport_size[1];
    state.view.camera.pan(delta_px, viewport_height);
}

/// Zoomt die Kamera um einen Faktor (Mausrad).
pub fn zoom_camera(state: &mut AppState, factor: f32) {
    state.view.camera.zoom_by(factor);
}

/// Schaltet den Pick-Modus um und meldet den neuen Zustand in der Statuszeile.
pub fn toggle_pick_mode(state: &mut AppState) {
    state.view.pick_mode = !state.view.pick_mode;
    let label = if state.view.pick_mode { "an" } else { "aus" };
    log::info!("Pick-Modus {label}");
    state.ui.status_message = Some(format!("Pick-Modus {label}"));
}
