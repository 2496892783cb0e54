//! Offscreen presentation with CPU readback.

use std::path::Path;

use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, RgbaImage};
use wgpu::TextureFormat;

use super::context::{GpuContext, GpuError};
use super::presenter::{FrameSink, PresentError, Presenter};
use super::textures::{ReadbackBuffer, RenderTarget};
use crate::frame::PixelBuffer;

/// Color format of the offscreen target.
pub const HEADLESS_FORMAT: TextureFormat = TextureFormat::Rgba8Unorm;

/// Renders frames into an offscreen target the size of the frame.
///
/// After [`FrameSink::present`], [`HeadlessPresenter::read_pixels`] returns
/// what a window of the same size would have shown.
pub struct HeadlessPresenter {
    presenter: Presenter,
    target: RenderTarget,
    readback: ReadbackBuffer,
    ctx: GpuContext,
    frames_presented: u64,
}

impl HeadlessPresenter {
    pub async fn new(width: u32, height: u32) -> Result<Self, GpuError> {
        let ctx = GpuContext::new().await?;
        Self::with_context(ctx, width, height)
    }

    pub fn with_context(ctx: GpuContext, width: u32, height: u32) -> Result<Self, GpuError> {
        let presenter = Presenter::new(&ctx.device, HEADLESS_FORMAT, width, height)?;
        let target = RenderTarget::for_output(
            &ctx.device,
            "headless_target",
            width,
            height,
            HEADLESS_FORMAT,
        );
        let readback = ReadbackBuffer::new(&ctx.device, width, height);

        Ok(Self {
            presenter,
            target,
            readback,
            ctx,
            frames_presented: 0,
        })
    }

    /// RGBA8 pixels of the last presented frame, top screen row first.
    pub fn read_pixels(&self) -> Result<Vec<u8>, PresentError> {
        self.readback.read_pixels(&self.ctx.device)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Get GPU adapter info.
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.ctx.adapter_info()
    }
}

impl FrameSink for HeadlessPresenter {
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), PresentError> {
        self.presenter.upload(&self.ctx.queue, frame)?;

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("headless_encoder"),
            });

        self.presenter.draw(&mut encoder, self.target.view());
        self.readback.copy_from(&mut encoder, &self.target);
        self.ctx.queue.submit(std::iter::once(encoder.finish()));

        self.frames_presented += 1;
        Ok(())
    }
}

/// Write tightly packed RGBA8 `pixels` to a PNG file.
pub fn save_png<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
) -> Result<(), ImageError> {
    let image = RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
        ImageError::Parameter(ParameterError::from_kind(ParameterErrorKind::DimensionMismatch))
    })?;
    image.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_png_rejects_short_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_png(dir.path().join("short.png"), 4, 4, vec![0; 10]);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        save_png(&path, 4, 2, vec![255; 4 * 2 * 4]).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 2));
    }
}
