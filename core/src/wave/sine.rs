//! Sine trace generator.

use std::f32::consts::TAU;

use crate::frame::{PixelBuffer, Rgba};

/// Row hit by horizontal sample `x`.
///
/// `angle = frequency * x * (2π / width) + phase`, and the row is
/// `round(amplitude * sin(angle)) + height / 2`. The result is not clamped;
/// rows outside `[0, height)` are for the caller to drop.
pub fn row_for_sample(
    x: u32,
    width: u32,
    height: u32,
    amplitude: f32,
    frequency: f32,
    phase: f32,
) -> i64 {
    let increment = TAU / width as f32;
    let angle = frequency * x as f32 * increment + phase;
    // `as` saturates, so huge amplitudes land far off-screen rather than wrap.
    let offset = (amplitude * angle.sin()).round() as i64;
    offset.saturating_add(height as i64 / 2)
}

/// Trace the sine curve across the buffer in `color`.
///
/// Writes at most one pixel per column. Pixels off the curve are untouched,
/// so callers clear the buffer first. Returns the number of pixels plotted.
pub fn draw_sine_wave(
    buffer: &mut PixelBuffer,
    amplitude: f32,
    frequency: f32,
    phase: f32,
    color: Rgba,
) -> usize {
    let (width, height) = (buffer.width(), buffer.height());
    let mut plotted = 0;

    for x in 0..width {
        let y = row_for_sample(x, width, height, amplitude, frequency, phase);
        if (0..height as i64).contains(&y) {
            buffer.set_pixel(x as i64, y, color);
            plotted += 1;
        }
    }

    plotted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::RED;

    #[test]
    fn test_hand_computed_rows() {
        // 2π/8 per column: sin at 0, π/4, π/2, ... scaled by 1 and rounded.
        let rows: Vec<i64> = (0..8).map(|x| row_for_sample(x, 8, 4, 1.0, 1.0, 0.0)).collect();
        assert_eq!(rows, vec![2, 3, 3, 3, 2, 1, 1, 1]);
    }

    #[test]
    fn test_flat_line_when_frequency_is_zero() {
        let mut buffer = PixelBuffer::new(32, 10);
        let plotted = draw_sine_wave(&mut buffer, 40.0, 0.0, 0.0, RED);

        assert_eq!(plotted, 32);
        for x in 0..32 {
            assert_eq!(buffer.pixel(x, 5), Some(RED));
        }
    }

    #[test]
    fn test_huge_amplitude_does_not_overflow() {
        let mut buffer = PixelBuffer::new(16, 16);
        let plotted = draw_sine_wave(&mut buffer, f32::MAX, 1.0, 0.5, RED);
        assert!(plotted <= 16);
    }
}
