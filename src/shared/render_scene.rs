//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Das Mesh selbst wird nicht pro Frame übergeben — seine GPU-Buffer
//! werden einmalig über `Renderer::set_mesh` hochgeladen.

use super::ViewerOptions;
use crate::core::OrbitCamera;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: OrbitCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// IDs der selektierten Vertices in Anzeige-Reihenfolge
    pub selected_vertex_ids: Vec<u32>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: ViewerOptions,
}
