use crate::core::OrbitCamera;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Orbit-Kamera für die 3D-Ansicht
    pub camera: OrbitCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Pick-Modus aktiv: Sekundärklick pickt Vertices
    pub pick_mode: bool,
    /// Signalisiert, dass das Mesh neu in den GPU-Renderer hochgeladen werden muss
    pub mesh_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
            viewport_size: [0.0, 0.0],
            pick_mode: false,
            mesh_dirty: false,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
