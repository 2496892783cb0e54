//! CPU-side frame storage.
//!
//! A [`PixelBuffer`] holds one frame as a flat, row-major grid of RGBA float
//! samples, ready to be uploaded to an `Rgba32Float` texture unchanged.

mod buffer;

pub use buffer::{PixelBuffer, Rgba, BACKGROUND, CHANNELS, RED};
