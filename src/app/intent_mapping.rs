//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraOrbit { delta } => vec![AppCommand::OrbitCamera { delta }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { factor } => vec![AppCommand::ZoomCamera { factor }],
        AppIntent::PickModeToggled => vec![AppCommand::TogglePickMode],
        AppIntent::VertexPickRequested { ray } => {
            // Ohne Mesh gibt es nichts aufzulösen
            if state.mesh.is_none() {
                return Vec::new();
            }
            vec![AppCommand::PickVertex { ray }]
        }
        AppIntent::MultiSelectToggled => vec![AppCommand::ToggleMultiSelect],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::CopySelectionRequested => vec![AppCommand::CopySelectionToClipboard],
    }
}
