//! Orbit-Kamera für die 3D-Ansicht (Orbit, Pan, Zoom).

use super::picking::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

/// Orbit-Kamera, die um einen Zielpunkt kreist.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Zielpunkt in Welt-Koordinaten (Orbit-Zentrum)
    pub target: Vec3,
    /// Abstand des Auges zum Ziel
    pub distance: f32,
    /// Azimut in Radiant (0 = Blick entlang -Z)
    pub yaw: f32,
    /// Elevation in Radiant (positiv = von oben)
    pub pitch: f32,
}

impl OrbitCamera {
    /// Vertikales Sichtfeld.
    pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_3;
    /// Minimaler Abstand zum Ziel.
    pub const DISTANCE_MIN: f32 = 0.001;
    /// Pitch-Begrenzung knapp unter der Polstellung.
    pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts.
    pub const ZOOM_STEP: f32 = 1.2;
    /// Zoom-Schritt bei Mausrad-Scroll.
    pub const SCROLL_ZOOM_STEP: f32 = 1.1;

    /// Erstellt eine neue Kamera mit Standardausrichtung.
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 5.0,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: std::f32::consts::FRAC_PI_6,
        }
    }

    /// Position des Kamera-Auges in Welt-Koordinaten.
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;
        self.target + offset
    }

    /// Dreht die Kamera um das Ziel.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Verschiebt das Ziel in der Bildebene (Pixel-Delta).
    pub fn pan(&mut self, delta_px: Vec2, viewport_height: f32) {
        let world_per_pixel = self.world_per_pixel(viewport_height);
        let view_inv = self.view_matrix().inverse();
        let right = view_inv.transform_vector3(Vec3::X);
        let up = view_inv.transform_vector3(Vec3::Y);
        // Pixel-Y wächst nach unten, Welt-Up nach oben
        self.target += (-right * delta_px.x + up * delta_px.y) * world_per_pixel;
    }

    /// Ändert den Abstand zum Ziel (Faktor > 1 zoomt heraus).
    pub fn zoom_by(&mut self, factor: f32) {
        self.distance = (self.distance * factor).max(Self::DISTANCE_MIN);
    }

    /// Richtet die Kamera auf eine Bounding-Box aus und wählt den Abstand so,
    /// dass die Box vollständig sichtbar ist.
    pub fn frame_bounds(&mut self, min: Vec3, max: Vec3) {
        self.target = (min + max) * 0.5;
        let radius = ((max - min).length() * 0.5).max(Self::DISTANCE_MIN);
        self.distance = radius / (Self::FOV_Y * 0.5).sin() * 1.2;
    }

    /// Gibt die View-Matrix zurück.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Gibt die Projektions-Matrix zurück.
    /// Near/Far skalieren mit dem Abstand, damit Meshes jeder Größe passen.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let near = (self.distance * 0.001).max(1e-4);
        let far = self.distance * 100.0;
        Mat4::perspective_rh(Self::FOV_Y, aspect.max(1e-3), near, far)
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten
    /// in der Ebene des Kamera-Ziels.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        let vh = viewport_height.max(1.0);
        2.0 * self.distance * (Self::FOV_Y * 0.5).tan() / vh
    }

    /// Konvertiert eine Screen-Position in einen Pick-Strahl in Welt-Koordinaten.
    pub fn screen_ray(&self, screen_pos: Vec2, viewport_size: Vec2) -> Ray {
        let size = viewport_size.max(Vec2::ONE);
        // Screen-Koordinaten zentrieren (-1 bis 1); Y flippen (Screen wächst nach unten)
        let ndc = Vec2::new(
            (screen_pos.x / size.x) * 2.0 - 1.0,
            1.0 - (screen_pos.y / size.y) * 2.0,
        );

        let view_proj_inv =
            (self.projection_matrix(size.x / size.y) * self.view_matrix()).inverse();

        let near = view_proj_inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = view_proj_inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near = near.xyz() / near.w;
        let far = far.xyz() / far.w;

        Ray {
            origin: near,
            direction: (far - near).normalize_or_zero(),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
