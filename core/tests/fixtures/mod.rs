//! Shared test fixtures for frame tests.

#![allow(dead_code)]

use wavescope::frame::{PixelBuffer, RED};
use wavescope::gpu::{FrameSink, PresentError};

/// Small buffer used by the hand-computed scenarios.
pub fn tiny_buffer() -> PixelBuffer {
    PixelBuffer::new(8, 4)
}

/// Buffer at the viewer's default size.
pub fn window_buffer() -> PixelBuffer {
    PixelBuffer::new(320, 200)
}

/// `(x, y)` of every red pixel, in row-major order.
pub fn red_pixels(buffer: &PixelBuffer) -> Vec<(i64, i64)> {
    let mut found = Vec::new();
    for y in 0..buffer.height() as i64 {
        for x in 0..buffer.width() as i64 {
            if buffer.pixel(x, y) == Some(RED) {
                found.push((x, y));
            }
        }
    }
    found
}

/// RGBA8 pixel at screen `(x, row)` of a top-down readback.
pub fn readback_pixel(pixels: &[u8], width: u32, x: u32, row: u32) -> [u8; 4] {
    let offset = ((row * width + x) * 4) as usize;
    [
        pixels[offset],
        pixels[offset + 1],
        pixels[offset + 2],
        pixels[offset + 3],
    ]
}

/// Frame sink that keeps a copy of every presented frame.
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<PixelBuffer>,
}

impl FrameSink for RecordingSink {
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), PresentError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
