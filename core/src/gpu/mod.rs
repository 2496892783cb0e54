//! GPU presentation using wgpu.
//!
//! Provides the CPU→GPU path for finished frames: a single `Rgba32Float`
//! texture rewritten every frame and drawn with a full-screen quad, either
//! to a window surface or to an offscreen target with readback.

pub mod context;
pub mod headless;
pub mod layouts;
pub mod pipelines;
pub mod presenter;
pub mod surface;
pub mod textures;

pub use context::{GpuContext, GpuError};
pub use headless::{save_png, HeadlessPresenter};
pub use presenter::{FrameSink, PresentError, Presenter};
pub use surface::SurfacePresenter;
