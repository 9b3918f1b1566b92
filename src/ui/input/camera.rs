//! Kamera-Eingaben: Orbit-/Pan-Drags und Scroll-Zoom.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use crate::core::OrbitCamera;
use glam::Vec2;

impl InputState {
    /// Verarbeitet Drag-Bewegungen: Primär-Drag orbitet, Shift-Drag
    /// und Mittelklick-Drag verschieben das Kamera-Ziel.
    pub(crate) fn handle_camera_drag(
        &mut self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        let response = ctx.response;

        // Der Modus wird beim Drag-Start eingefroren, damit ein während
        // des Drags losgelassenes Shift die Geste nicht umschaltet
        if response.drag_started_by(egui::PointerButton::Primary) {
            self.primary_drag_mode = if modifiers.shift {
                PrimaryDragMode::Pan
            } else {
                PrimaryDragMode::Orbit
            };
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                let delta = Vec2::new(delta.x, delta.y);
                match self.primary_drag_mode {
                    PrimaryDragMode::Orbit => events.push(AppIntent::CameraOrbit { delta }),
                    PrimaryDragMode::Pan => events.push(AppIntent::CameraPan { delta }),
                    PrimaryDragMode::None => {}
                }
            }
        }

        if response.dragged_by(egui::PointerButton::Middle) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CameraPan {
                    delta: Vec2::new(delta.x, delta.y),
                });
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }

    /// Verarbeitet Mausrad-Scroll als Zoom.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }

        let scroll_y = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll_y.abs() <= f32::EPSILON {
            return;
        }

        // Positives Scroll = hineinzoomen (Distanz verkleinern)
        let steps = scroll_y / 50.0;
        let factor = OrbitCamera::SCROLL_ZOOM_STEP.powf(-steps);
        events.push(AppIntent::CameraZoom { factor });
    }
}
