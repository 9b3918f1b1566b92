//! GPU-Rendering mit wgpu.

mod callback;
mod marker_renderer;
mod mesh_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::WgpuRenderCallback;
pub(crate) use marker_renderer::MarkerRenderer;
pub(crate) use mesh_renderer::MeshRenderer;
use types::RenderContext;

use crate::core::TriMesh;
use crate::shared::ViewerOptions;
use eframe::egui_wgpu;

/// Haupt-Renderer für die Mesh-Ansicht.
///
/// Dieser Renderer verwaltet seinen eigenen Zustand (GPU-Buffer, Pipelines)
/// und bietet eine saubere API: `new()` + `set_mesh()` + `render_scene()`.
pub struct Renderer {
    mesh_renderer: MeshRenderer,
    marker_renderer: MarkerRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Shader einmalig laden — alle Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(eframe::wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Picker Shader"),
            source: eframe::wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        let mesh_renderer = MeshRenderer::new(render_state, &shader);
        let marker_renderer = MarkerRenderer::new(render_state, &shader);

        Self {
            mesh_renderer,
            marker_renderer,
        }
    }

    /// Lädt ein Mesh in die GPU-Buffer aller Sub-Renderer hoch.
    pub fn set_mesh(
        &mut self,
        device: &eframe::wgpu::Device,
        mesh: &TriMesh,
        options: &ViewerOptions,
    ) {
        self.mesh_renderer.set_mesh(device, mesh);
        self.marker_renderer.set_mesh(device, mesh, options);
    }

    /// Entfernt die hochgeladene Geometrie.
    pub fn clear_mesh(&mut self) {
        self.mesh_renderer.clear_mesh();
        self.marker_renderer.clear_mesh();
    }

    /// Rendert die komplette Szene
    ///
    /// Reihenfolge: Oberfläche, Wireframe, Vertex-Marker, Selektions-Marker.
    pub fn render_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        let viewport_width = scene.viewport_size[0];
        let viewport_height = scene.viewport_size[1];
        if !viewport_width.is_finite()
            || !viewport_height.is_finite()
            || viewport_width <= 0.0
            || viewport_height <= 0.0
        {
            return;
        }

        // Gemeinsamer Kontext für alle Sub-Renderer
        let ctx = RenderContext {
            device,
            queue,
            camera: &scene.camera,
            viewport_size: scene.viewport_size,
            options: &scene.options,
        };

        self.mesh_renderer.render(&ctx, render_pass);
        self.marker_renderer
            .render(&ctx, render_pass, &scene.selected_vertex_ids);
    }
}
