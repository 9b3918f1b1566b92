//! Paint-Callback für das Viewport-Panel (egui_wgpu-Integration).

use super::Renderer;
use crate::shared::RenderScene;
use std::sync::{Arc, Mutex};

/// Übergibt die Szene eines Frames an den geteilten Renderer.
///
/// egui ruft `paint()` innerhalb seines eigenen Render-Passes auf; der
/// Renderer zeichnet direkt in diesen Pass (kein eigener Encoder nötig).
pub struct WgpuRenderCallback {
    /// Geteilter Renderer-Zustand (Pipelines, GPU-Buffer)
    pub renderer: Arc<Mutex<Renderer>>,
    /// Read-only Szene für diesen Frame
    pub scene: RenderScene,
    /// wgpu Device für Buffer-Allokation
    pub device: eframe::wgpu::Device,
    /// wgpu Queue für Uniform-Uploads
    pub queue: eframe::wgpu::Queue,
}

impl eframe::egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        _device: &eframe::wgpu::Device,
        _queue: &eframe::wgpu::Queue,
        _screen_descriptor: &eframe::egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut eframe::wgpu::CommandEncoder,
        _callback_resources: &mut eframe::egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _callback_resources: &'b eframe::egui_wgpu::CallbackResources,
    ) {
        match self.renderer.lock() {
            Ok(mut renderer) => {
                renderer.render_scene(&self.device, &self.queue, render_pass, &self.scene);
            }
            Err(_) => log::error!("Renderer-Lock fehlgeschlagen"),
        }
    }
}
