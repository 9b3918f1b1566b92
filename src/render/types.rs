//! Rendering-Typen und Konfiguration.

use crate::core::OrbitCamera;
use crate::shared::ViewerOptions;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen und View-Parameter, die jeder
/// Sub-Renderer bei jedem Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// Kamera (Orbit-Zustand)
    pub camera: &'a OrbitCamera,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
    /// Viewer-Optionen (Farben, Größen)
    pub options: &'a ViewerOptions,
}

/// Vertex der Mesh-Oberfläche (Position + Normale).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in Welt-Koordinaten
    pub position: [f32; 3],
    /// Glatte Vertex-Normale
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Eckpunkt des Billboard-Quads für Vertex-Marker.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Ecke im Einheitsquadrat (-1..1)
    pub corner: [f32; 2],
}

impl QuadVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Instanz-Daten für einen Vertex-Marker (Billboard).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MarkerInstance {
    /// Vertex-Position in Welt-Koordinaten
    pub position: [f32; 3],
    /// RGBA-Farbe des Markers
    pub color: [f32; 4],
    /// Marker-Größe in Screen-Pixeln (Skalierung siehe Uniforms.params)
    pub size_px: f32,
}

impl MarkerInstance {
    /// Erstellt eine neue Marker-Instanz.
    pub fn new(position: [f32; 3], color: [f32; 4], size_px: f32) -> Self {
        Self {
            position,
            color,
            size_px,
        }
    }

    /// Beschreibt das Instanz-Layout für wgpu (MarkerInstance).
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MarkerInstance>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Instance,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 7]>() as eframe::wgpu::BufferAddress,
                    shader_location: 3,
                    format: eframe::wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Uniform-Buffer für View-Projektion, Kamera-Achsen und Farben.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// Kamera-Rechtsachse in Welt-Koordinaten (Billboard-Expansion)
    pub camera_right: [f32; 4],
    /// Kamera-Hochachse in Welt-Koordinaten (Billboard-Expansion)
    pub camera_up: [f32; 4],
    /// Richtung zur Lichtquelle (Headlight = Blickrichtung)
    pub light_dir: [f32; 4],
    /// Füllfarbe der Mesh-Oberfläche
    pub surface_color: [f32; 4],
    /// Farbe des Wireframes
    pub wireframe_color: [f32; 4],
    /// params.x = Welt-Einheiten pro Screen-Pixel (Marker-Skalierung)
    pub params: [f32; 4],
}

/// Berechnet die View-Projection-Matrix für den 3D-Viewport.
pub(crate) fn build_view_projection(camera: &OrbitCamera, viewport_size: [f32; 2]) -> Mat4 {
    let aspect = viewport_size[0] / viewport_size[1].max(1.0);
    camera.projection_matrix(aspect) * camera.view_matrix()
}

/// Befüllt den gemeinsamen Uniform-Block aus Kamera und Optionen.
pub(crate) fn build_uniforms(ctx: &RenderContext) -> Uniforms {
    let view_proj = build_view_projection(ctx.camera, ctx.viewport_size);
    let view_inv = ctx.camera.view_matrix().inverse();
    let right = view_inv.transform_vector3(glam::Vec3::X);
    let up = view_inv.transform_vector3(glam::Vec3::Y);
    let light_dir = (ctx.camera.eye() - ctx.camera.target).normalize_or_zero();

    Uniforms {
        view_proj: view_proj.to_cols_array_2d(),
        camera_right: [right.x, right.y, right.z, 0.0],
        camera_up: [up.x, up.y, up.z, 0.0],
        light_dir: [light_dir.x, light_dir.y, light_dir.z, 0.0],
        surface_color: ctx.options.surface_color,
        wireframe_color: ctx.options.wireframe_color,
        params: [
            ctx.camera.world_per_pixel(ctx.viewport_size[1]),
            0.0,
            0.0,
            0.0,
        ],
    }
}
