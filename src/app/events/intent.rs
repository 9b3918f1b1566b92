use crate::core::Ray;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf das geladene Mesh zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um das Ziel drehen (Pixel-Delta)
    CameraOrbit { delta: Vec2 },
    /// Kamera-Ziel in der Bildebene verschieben (Pixel-Delta)
    CameraPan { delta: Vec2 },
    /// Kamera zoomen (Faktor > 1 = heraus)
    CameraZoom { factor: f32 },
    /// Pick-Modus umschalten (Taste `P`)
    PickModeToggled,
    /// Vertex per Klick-Strahl picken (Nearest-Vertex-Pick)
    VertexPickRequested { ray: Ray },
    /// Multi-Select-Modus umschalten (Taste `M`)
    MultiSelectToggled,
    /// Selektion aufheben (Taste `R` / Escape)
    ClearSelectionRequested,
    /// Selektion in die Zwischenablage kopieren (Taste `C`)
    CopySelectionRequested,
}
