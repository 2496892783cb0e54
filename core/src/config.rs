//! Viewer defaults.
//!
//! Only the two biases change at runtime; everything here is fixed when the
//! viewer starts.

use serde::{Deserialize, Serialize};

use crate::frame::{Rgba, RED};

/// Fixed settings for a viewer instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub title: String,
    /// Pixel buffer and initial window width.
    pub width: u32,
    /// Pixel buffer and initial window height.
    pub height: u32,
    /// Amplitude (rows) at zero amplitude bias.
    pub base_amplitude: f32,
    /// Frequency contributed by one unit of frequency bias.
    pub frequency_scale: f32,
    /// Phase advance per frame, in radians.
    pub phase_step: f32,
    pub initial_amplitude_bias: i32,
    pub initial_frequency_bias: i32,
    pub trace_color: Rgba,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Framebuffer Renderer".to_string(),
            width: 320,
            height: 200,
            base_amplitude: 10.0,
            frequency_scale: 0.1,
            phase_step: 0.05,
            initial_amplitude_bias: 30,
            initial_frequency_bias: 30,
            trace_color: RED,
        }
    }
}

impl ViewerConfig {
    /// Default settings at a different buffer size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}
