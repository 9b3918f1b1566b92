//! Zentrale Konfiguration für den Mesh Vertex Picker.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Mesh-Rendering ─────────────────────────────────────────────────

/// Füllfarbe der Mesh-Oberfläche (RGBA: Hellgrau).
pub const SURFACE_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
/// Farbe des Wireframes (RGBA: Weiß).
pub const WIREFRAME_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Hintergrundfarbe des Viewports (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Vertex-Marker ──────────────────────────────────────────────────

/// Farbe unselektierter Vertex-Marker (RGBA: Rosa).
pub const VERTEX_COLOR: [f32; 4] = [1.0, 0.75, 0.8, 1.0];
/// Farbe selektierter Vertex-Marker (RGBA: Rot).
pub const VERTEX_COLOR_SELECTED: [f32; 4] = [1.0, 0.1, 0.1, 1.0];
/// Marker-Größe in Screen-Pixeln.
pub const VERTEX_SIZE_PX: f32 = 5.0;
/// Marker-Größe selektierter Vertices in Screen-Pixeln.
pub const VERTEX_SIZE_SELECTED_PX: f32 = 7.0;

// ── Overlay ────────────────────────────────────────────────────────

/// Textfarbe des Selektions-Overlays (RGBA: Gelb).
pub const OVERLAY_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `mesh_vertex_picker.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerOptions {
    /// Füllfarbe der Mesh-Oberfläche (RGBA)
    pub surface_color: [f32; 4],
    /// Farbe des Wireframes
    pub wireframe_color: [f32; 4],
    /// Hintergrundfarbe des Viewports
    pub background_color: [f32; 4],
    /// Farbe unselektierter Vertex-Marker
    pub vertex_color: [f32; 4],
    /// Farbe selektierter Vertex-Marker
    pub vertex_color_selected: [f32; 4],
    /// Marker-Größe in Screen-Pixeln
    pub vertex_size_px: f32,
    /// Marker-Größe selektierter Vertices in Screen-Pixeln
    pub vertex_size_selected_px: f32,
    /// Textfarbe des Selektions-Overlays
    pub overlay_color: [f32; 4],
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            surface_color: SURFACE_COLOR,
            wireframe_color: WIREFRAME_COLOR,
            background_color: BACKGROUND_COLOR,
            vertex_color: VERTEX_COLOR,
            vertex_color_selected: VERTEX_COLOR_SELECTED,
            vertex_size_px: VERTEX_SIZE_PX,
            vertex_size_selected_px: VERTEX_SIZE_SELECTED_PX,
            overlay_color: OVERLAY_COLOR,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mesh_vertex_picker"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mesh_vertex_picker.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_roundtrip_through_toml() {
        let mut options = ViewerOptions::default();
        options.vertex_size_px = 9.0;
        options.vertex_color = [0.1, 0.2, 0.3, 1.0];

        let toml_text = toml::to_string_pretty(&options).expect("Serialisierung erwartet");
        let restored: ViewerOptions = toml::from_str(&toml_text).expect("Parse erwartet");

        assert_eq!(restored.vertex_size_px, 9.0);
        assert_eq!(restored.vertex_color, [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("mesh_vertex_picker_broken_options.toml");
        std::fs::write(&path, "not valid toml [").expect("Testdatei sollte schreibbar sein");

        let options = ViewerOptions::load_from_file(&path);
        assert_eq!(options.vertex_size_px, VERTEX_SIZE_PX);

        std::fs::remove_file(path).ok();
    }
}
