//! Wavescope Core
//!
//! Real-time sine waveform viewer: every frame a sine trace is drawn into a
//! CPU pixel buffer, uploaded to a GPU texture and blitted over the window.
//!
//! # Features
//!
//! - Row-major RGBA float pixel buffer with bounds-checked writes
//! - Deterministic sine trace generator
//! - Arrow-key control of amplitude and frequency biases
//! - GPU presentation via wgpu (Metal on macOS, Vulkan/GL on Linux)
//! - Headless rendering with pixel readback and PNG snapshots
//! - winit window host driving a two-state frame loop

pub mod app;
pub mod config;
pub mod frame;
pub mod gpu;
pub mod input;
pub mod wave;

// Re-export commonly used types
pub use app::{AppError, ErrorKind, FrameLoop, LoopEvent, LoopState};
pub use config::ViewerConfig;
pub use frame::{PixelBuffer, Rgba, BACKGROUND, RED};
pub use gpu::{FrameSink, GpuContext, GpuError, HeadlessPresenter, PresentError, Presenter};
pub use input::{InputController, Key, WaveAction};
pub use wave::{draw_sine_wave, WaveParameters};
