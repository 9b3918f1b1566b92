use crate::core::Ray;
use glam::Vec2;

/// Mutierende Commands, die der Controller auf dem AppState ausführt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Mesh aus Pfad laden
    LoadFile { path: String },
    /// Anwendung kontrolliert beenden
    RequestExit,
    /// Kamera auf das Mesh ausrichten
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um das Ziel drehen
    OrbitCamera { delta: Vec2 },
    /// Kamera-Ziel verschieben
    PanCamera { delta: Vec2 },
    /// Kamera zoomen
    ZoomCamera { factor: f32 },
    /// Pick-Modus umschalten
    TogglePickMode,
    /// Pick-Strahl auflösen und Selektion fortschalten
    PickVertex { ray: Ray },
    /// Multi-Select-Modus umschalten
    ToggleMultiSelect,
    /// Selektion leeren
    ClearSelection,
    /// Selektion in die Zwischenablage schreiben
    CopySelectionToClipboard,
}
