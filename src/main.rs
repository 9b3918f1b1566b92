//! Mesh Vertex Picker.
//!
//! Rust-basierter OBJ-Viewer zum interaktiven Picken von Mesh-Vertices.
//! Rendering mit egui + wgpu, Nearest-Vertex-Lookup über einen KD-Tree.

use eframe::egui;
use eframe::egui_wgpu;
use mesh_vertex_picker::{
    render, ui, AppCommand, AppController, AppIntent, AppState, ViewerOptions,
};

/// Standard-Mesh, wenn kein Pfad übergeben wurde.
const DEFAULT_MESH_PATH: &str = "sample_obj/bunny.obj";

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Mesh Vertex Picker v{} startet...", env!("CARGO_PKG_VERSION"));

        let mesh_path = std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_MESH_PATH.to_string());

        // Optionen aus TOML laden (oder Standardwerte); beim ersten Start
        // wird die Datei mit den Defaults angelegt
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = viewer_options.save_to_file(&config_path) {
                log::warn!("Optionen-Datei konnte nicht angelegt werden: {e}");
            }
        }

        // Start-Mesh laden, bevor das Fenster aufgeht — Startup-Fehler
        // beenden das Programm mit Meldung und Exit-Code != 0
        let mut state = AppState::new();
        state.options = viewer_options;
        let mut controller = AppController::new();
        controller.handle_command(&mut state, AppCommand::LoadFile { path: mesh_path })?;

        let window_title = match state.mesh.as_deref() {
            Some(mesh) => format!("Mesh Vertex Picker — {}", mesh.name),
            None => "Mesh Vertex Picker".to_string(),
        };

        log::info!(
            "Initialisierung abgeschlossen. Bedienung: \
             P = Pick-Modus, Sekundärklick = Vertex picken, \
             M = Multi-Select, R = Selektion aufheben, C = Kopieren"
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_title(window_title.clone()),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            &window_title,
            options,
            Box::new(move |cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(ViewerApp::new(render_state, state, controller)))
            }),
        )?;

        Ok(())
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
    input: ui::InputState,
}

impl ViewerApp {
    fn new(render_state: &egui_wgpu::RenderState, state: AppState, controller: AppController) -> Self {
        Self {
            state,
            controller,
            renderer: std::sync::Arc::new(std::sync::Mutex::new(render::Renderer::new(
                render_state,
            ))),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_mesh_upload();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        let background = color32(self.state.options.background_color);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    self.state.view.pick_mode,
                    !self.state.selection.is_empty(),
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        scene,
                        device: self.device.clone(),
                        queue: self.queue.clone(),
                    },
                );

                ui.painter().add(callback);

                if self.state.mesh.is_none() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No file loaded. Use File → Open",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        ui::render_selection_overlay(ctx, &self.state);

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_mesh_upload(&mut self) {
        if !self.state.view.mesh_dirty {
            return;
        }
        self.state.view.mesh_dirty = false;

        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)");
            return;
        };
        if let Some(mesh) = self.state.mesh.as_deref() {
            renderer.set_mesh(&self.device, mesh, &self.state.options);
            log::info!("Mesh in Renderer hochgeladen");
        } else {
            renderer.clear_mesh();
            log::info!("Mesh aus Renderer entfernt");
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
