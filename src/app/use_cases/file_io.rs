//! Use-Case-Funktionen für Dateiaktionen.

use crate::app::AppState;
use std::path::Path;
use std::sync::Arc;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Lädt die ausgewählte Datei in den AppState.
///
/// Ersetzt das Mesh vollständig, leert die Selektion und richtet die
/// Kamera auf die neue Geometrie aus. Schlägt das Laden fehl, bleibt der
/// bisherige Zustand unverändert (der Fehler wird an der Event-Grenze
/// geloggt).
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let mesh = crate::io::load_mesh(Path::new(&path))?;

    state.ui.current_file_path = Some(path);
    state.selection.picks.clear();
    if let Some((min, max)) = mesh.bounds() {
        state.view.camera.frame_bounds(min, max);
    }

    state.ui.status_message = Some(format!(
        "{}: {} Vertices, {} Faces",
        mesh.name,
        mesh.vertex_count(),
        mesh.face_count()
    ));

    state.mesh = Some(Arc::new(mesh));
    state.view.mesh_dirty = true;
    Ok(())
}
