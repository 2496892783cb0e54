//! Procedural waveform generation.
//!
//! - [`WaveParameters`]: the live amplitude/frequency biases and phase
//! - [`draw_sine_wave`]: traces a one-pixel-wide sine curve into a frame

mod params;
mod sine;

pub use params::WaveParameters;
pub use sine::{draw_sine_wave, row_for_sample};
