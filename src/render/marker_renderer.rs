//! Marker-Renderer mit GPU-Instancing (Vertex-Punkte + Selektion).

use super::types::{build_uniforms, MarkerInstance, QuadVertex, RenderContext, Uniforms};
use crate::core::TriMesh;
use crate::shared::ViewerOptions;
use eframe::{egui_wgpu, wgpu};
use glam::Vec3;
use wgpu::util::DeviceExt;

/// Renderer für Vertex-Marker (Billboards).
pub struct MarkerRenderer {
    pipeline: wgpu::RenderPipeline,
    quad_vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// Statische Instanzen aller Mesh-Vertices (beim Laden hochgeladen)
    base_instance_buffer: Option<wgpu::Buffer>,
    base_instance_count: u32,
    /// Vertex-Positionen für die Selektion-Instanzen pro Frame
    vertex_positions: Vec<Vec3>,
    selected_instance_buffer: Option<wgpu::Buffer>,
    selected_capacity: usize,
    /// Wiederverwendbarer Scratch-Buffer für Selektion-Instanzen
    selected_scratch: Vec<MarkerInstance>,
}

impl MarkerRenderer {
    /// Erstellt einen neuen Marker-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        // Uniform-Buffer erstellen
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Marker Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Bind-Group-Layout
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Marker Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        // Bind-Group erstellen
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Marker Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        // Pipeline-Layout
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Marker Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Render-Pipeline
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Marker Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_marker"),
                buffers: &[QuadVertex::desc(), MarkerInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_marker"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: true,
            },
            multiview: None,
            cache: None,
        });

        // Vertex-Buffer für Quad (2 Dreiecke)
        let vertices = [
            QuadVertex { corner: [-1.0, -1.0] },
            QuadVertex { corner: [1.0, -1.0] },
            QuadVertex { corner: [1.0, 1.0] },
            QuadVertex { corner: [-1.0, -1.0] },
            QuadVertex { corner: [1.0, 1.0] },
            QuadVertex { corner: [-1.0, 1.0] },
        ];

        let quad_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Marker Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            quad_vertex_buffer,
            uniform_buffer,
            bind_group,
            base_instance_buffer: None,
            base_instance_count: 0,
            vertex_positions: Vec::new(),
            selected_instance_buffer: None,
            selected_capacity: 0,
            selected_scratch: Vec::new(),
        }
    }

    /// Lädt die Marker-Instanzen aller Mesh-Vertices einmalig hoch.
    pub fn set_mesh(&mut self, device: &wgpu::Device, mesh: &TriMesh, options: &ViewerOptions) {
        self.vertex_positions = mesh.vertices().to_vec();

        let instances: Vec<MarkerInstance> = mesh
            .vertices()
            .iter()
            .map(|v| MarkerInstance::new(v.to_array(), options.vertex_color, options.vertex_size_px))
            .collect();

        self.base_instance_buffer =
            Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Marker Base Instance Buffer"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            }));
        self.base_instance_count = instances.len() as u32;
    }

    /// Entfernt die hochgeladenen Marker-Instanzen.
    pub fn clear_mesh(&mut self) {
        self.base_instance_buffer = None;
        self.base_instance_count = 0;
        self.vertex_positions.clear();
    }

    /// Rendert alle Vertex-Marker und darüber die Selektions-Marker.
    ///
    /// Die Selektions-Instanzen werden bei jeder Änderung komplett aus der
    /// Selektion neu aufgebaut (dokumentiertes Full-Rebuild-Verhalten).
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        selected_vertex_ids: &[u32],
    ) {
        let Some(base_instances) = self.base_instance_buffer.as_ref() else {
            return;
        };

        let uniforms = build_uniforms(ctx);
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.quad_vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, base_instances.slice(..));
        render_pass.draw(0..6, 0..self.base_instance_count);

        // Selektions-Marker (größer, rot) über den Basis-Markern
        let mut instances = std::mem::take(&mut self.selected_scratch);
        instances.clear();
        for &vertex_id in selected_vertex_ids {
            let Some(position) = self.vertex_positions.get(vertex_id as usize) else {
                continue;
            };
            instances.push(MarkerInstance::new(
                position.to_array(),
                ctx.options.vertex_color_selected,
                ctx.options.vertex_size_selected_px,
            ));
        }

        if instances.is_empty() {
            self.selected_scratch = instances;
            return;
        }

        // Instance-Buffer erstellen/aktualisieren (Reuse)
        if self.selected_instance_buffer.is_none() || instances.len() > self.selected_capacity {
            let instance_size = std::mem::size_of::<MarkerInstance>() as u64;
            let buffer_size = (instances.len() as u64) * instance_size;
            self.selected_instance_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Marker Selected Instance Buffer"),
                size: buffer_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.selected_capacity = instances.len();
        }

        let Some(selected_buffer) = self.selected_instance_buffer.as_ref() else {
            log::error!("MarkerRenderer: Instance-Buffer fehlt vor dem Draw-Call");
            self.selected_scratch = instances;
            return;
        };

        ctx.queue
            .write_buffer(selected_buffer, 0, bytemuck::cast_slice(&instances));

        render_pass.set_vertex_buffer(1, selected_buffer.slice(..));
        render_pass.draw(0..6, 0..instances.len() as u32);
        self.selected_scratch = instances;
    }
}
