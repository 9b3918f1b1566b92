//! Klick-Events: Sekundärklick pickt im Pick-Modus.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Verarbeitet Pick-Klicks im Viewport.
    ///
    /// Gepickt wird mit dem Sekundärklick, damit der Primärklick frei
    /// für die Kamera-Steuerung bleibt.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.pick_mode {
            return;
        }

        if ctx.response.secondary_clicked() {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                let local = pointer_pos - ctx.response.rect.min;
                let ray = ctx.camera.screen_ray(
                    Vec2::new(local.x, local.y),
                    Vec2::new(ctx.viewport_size[0], ctx.viewport_size[1]),
                );

                events.push(AppIntent::VertexPickRequested { ray });
            }
        }
    }
}
