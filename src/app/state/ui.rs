/// UI-bezogener Anwendungszustand (Dialoge, Statuszeile).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Datei-Öffnen-Dialog angezeigt werden soll
    pub show_file_dialog: bool,
    /// Pfad der aktuell geladenen Datei
    pub current_file_path: Option<String>,
    /// Statusnachricht (z.B. Pick-Ergebnis, Clipboard-Hinweis)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
