//! Renderer für Mesh-Oberfläche und Wireframe.

use super::types::{build_uniforms, MeshVertex, RenderContext, Uniforms};
use crate::core::TriMesh;
use eframe::{egui_wgpu, wgpu};
use wgpu::util::DeviceExt;

/// Einmalig hochgeladene GPU-Buffer des aktuellen Meshes.
struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    triangle_index_buffer: wgpu::Buffer,
    triangle_index_count: u32,
    wire_index_buffer: wgpu::Buffer,
    wire_index_count: u32,
}

/// Renderer für die Mesh-Geometrie (Surface + Wireframe).
pub struct MeshRenderer {
    surface_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    buffers: Option<MeshBuffers>,
}

impl MeshRenderer {
    /// Erstellt einen neuen Mesh-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        // Uniform-Buffer erstellen
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Mesh Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Bind-Group-Layout
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Mesh Bind Group Layout"),
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
            label: Some("Mesh Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        // Pipeline-Layout
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Surface-Pipeline (Dreiecke, Backface-Culling — kein Depth-Buffer
        // im egui-Pass, die Zeichenreihenfolge übernimmt die Sortierung)
        let surface_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Surface Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_mesh"),
                buffers: &[MeshVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_mesh"),
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
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        // Wireframe-Pipeline (Linien über der Oberfläche)
        let wire_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Wireframe Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_wire"),
                buffers: &[MeshVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_wire"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
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
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            surface_pipeline,
            wire_pipeline,
            uniform_buffer,
            bind_group,
            buffers: None,
        }
    }

    /// Lädt die Geometrie des Meshes einmalig in GPU-Buffer hoch.
    pub fn set_mesh(&mut self, device: &wgpu::Device, mesh: &TriMesh) {
        let normals = mesh.vertex_normals();
        let vertices: Vec<MeshVertex> = mesh
            .vertices()
            .iter()
            .zip(&normals)
            .map(|(position, normal)| MeshVertex {
                position: position.to_array(),
                normal: normal.to_array(),
            })
            .collect();

        let triangle_indices: Vec<u32> = mesh.faces().iter().flatten().copied().collect();
        let wire_indices: Vec<u32> = mesh.edges().iter().flatten().copied().collect();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let triangle_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Triangle Index Buffer"),
            contents: bytemuck::cast_slice(&triangle_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let wire_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Wire Index Buffer"),
            contents: bytemuck::cast_slice(&wire_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!(
            "Mesh-Geometrie hochgeladen: {} Vertices, {} Dreiecks-Indizes, {} Linien-Indizes",
            vertices.len(),
            triangle_indices.len(),
            wire_indices.len()
        );

        self.buffers = Some(MeshBuffers {
            vertex_buffer,
            triangle_index_buffer,
            triangle_index_count: triangle_indices.len() as u32,
            wire_index_buffer,
            wire_index_count: wire_indices.len() as u32,
        });
    }

    /// Entfernt die hochgeladene Geometrie.
    pub fn clear_mesh(&mut self) {
        self.buffers = None;
    }

    /// Rendert Oberfläche und Wireframe des hochgeladenen Meshes.
    pub fn render(&mut self, ctx: &RenderContext, render_pass: &mut wgpu::RenderPass<'static>) {
        let Some(buffers) = self.buffers.as_ref() else {
            return;
        };

        let uniforms = build_uniforms(ctx);
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));

        if buffers.triangle_index_count > 0 {
            render_pass.set_pipeline(&self.surface_pipeline);
            render_pass.set_index_buffer(
                buffers.triangle_index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            render_pass.draw_indexed(0..buffers.triangle_index_count, 0, 0..1);
        }

        if buffers.wire_index_count > 0 {
            render_pass.set_pipeline(&self.wire_pipeline);
            render_pass.set_index_buffer(
                buffers.wire_index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            render_pass.draw_indexed(0..buffers.wire_index_count, 0, 0..1);
        }
    }
}
