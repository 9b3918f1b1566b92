//! Baut die Render-Szene aus dem aktuellen AppState.

use super::AppState;
use crate::shared::RenderScene;

/// Erstellt den Frame-Vertrag für den Renderer.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        selected_vertex_ids: state.selection.selected_ids(),
        options: state.options.clone(),
    }
}
