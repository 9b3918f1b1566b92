//! Viewport-Input-Handling: Maus-Events, Kamera-Steuerung → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Pick-Klicks (Sekundärklick im Pick-Modus)
//! - `camera` — Orbit-/Pan-Drags und Scroll-Zoom

mod camera;
mod clicks;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::OrbitCamera;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    Orbit,
    Pan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a OrbitCamera,
    pub pick_mode: bool,
}

/// Verwaltet den Input-Zustand für das Viewport (Drag-Modus).
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-,
    /// Scroll- und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &OrbitCamera,
        pick_mode: bool,
        has_selection: bool,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            pick_mode,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui, has_selection));

        let modifiers = ui.input(|i| i.modifiers);

        self.handle_camera_drag(&ctx, modifiers, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);

        events
    }
}
