use crate::app::CommandLog;
use crate::core::TriMesh;
use crate::shared::ViewerOptions;
use std::sync::Arc;

use super::{SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladenes Mesh (None = keine Datei geladen)
    pub mesh: Option<Arc<TriMesh>>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen)
    pub options: ViewerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            mesh: None,
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            options: ViewerOptions::default(),
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
