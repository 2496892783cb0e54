//! Window surface presentation.

use std::sync::Arc;

use wgpu::Surface;
use winit::window::Window;

use super::context::{GpuContext, GpuError};
use super::presenter::{FrameSink, PresentError, Presenter};
use crate::frame::PixelBuffer;

/// Presents frames to a window's swapchain.
///
/// Fields drop in declaration order, so GPU resources and the surface are
/// released before the window they draw into.
pub struct SurfacePresenter {
    presenter: Presenter,
    surface: Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    ctx: GpuContext,
    window: Arc<Window>,
}

impl SurfacePresenter {
    /// Acquire a GPU context for `window` and build the blit pipeline for
    /// `frame_width` x `frame_height` frames.
    pub fn new(
        window: Arc<Window>,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<Self, GpuError> {
        let size = window.inner_size();
        let (ctx, surface) = pollster::block_on(GpuContext::for_window(window.clone()))?;

        let mut config = surface
            .get_default_config(&ctx.adapter, size.width.max(1), size.height.max(1))
            .ok_or(GpuError::UnsupportedSurface)?;
        config.present_mode = wgpu::PresentMode::AutoVsync;
        surface.configure(&ctx.device, &config);

        let presenter = Presenter::new(&ctx.device, config.format, frame_width, frame_height)?;
        log::info!(
            "Surface {}x{} ({:?}), frame {}x{}",
            config.width,
            config.height,
            config.format,
            frame_width,
            frame_height
        );

        Ok(Self {
            presenter,
            surface,
            config,
            ctx,
            window,
        })
    }

    /// Match the surface to the window's current size.
    ///
    /// Returns `false` while the window has no drawable area.
    fn sync_viewport(&mut self) -> bool {
        let size = self.window.inner_size();
        if size.width == 0 || size.height == 0 {
            return false;
        }
        if size.width != self.config.width || size.height != self.config.height {
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(&self.ctx.device, &self.config);
            log::debug!("Viewport resized to {}x{}", size.width, size.height);
        }
        true
    }
}

impl FrameSink for SurfacePresenter {
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), PresentError> {
        if !self.sync_viewport() {
            return Ok(());
        }

        self.presenter.upload(&self.ctx.queue, frame)?;

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.ctx.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("surface_encoder"),
            });

        self.presenter.draw(&mut encoder, &view);
        self.ctx.queue.submit(std::iter::once(encoder.finish()));

        self.window.pre_present_notify();
        output.present();
        Ok(())
    }
}
