//! Row-major RGBA float pixel grid.

/// One RGBA sample, each component normalized to [0, 1].
pub type Rgba = [f32; 4];

/// Components per pixel.
pub const CHANNELS: usize = 4;

/// Cleared pixel value (black, zero alpha).
pub const BACKGROUND: Rgba = [0.0, 0.0, 0.0, 0.0];

/// Opaque red, the waveform trace color.
pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];

/// Fixed-size frame of RGBA float samples.
///
/// Dimensions are set at construction and never change. Pixel `(x, y)` lives
/// at component offset `(y * width + x) * 4`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Allocate a cleared buffer of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            width,
            height,
            data: vec![0.0; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every component of every pixel to zero.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Write `color` at `(x, y)`.
    ///
    /// Coordinates outside the grid are ignored. Callers may pass rows computed
    /// from unbounded parameters and rely on this to drop them.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(offset) = self.offset(x, y) {
            self.data[offset..offset + CHANNELS].copy_from_slice(&color);
        }
    }

    /// Read the pixel at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba> {
        let offset = self.offset(x, y)?;
        let mut color = BACKGROUND;
        color.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        Some(color)
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_matching(&self, color: Rgba) -> usize {
        self.data
            .chunks_exact(CHANNELS)
            .filter(|px| *px == color.as_slice())
            .count()
    }

    /// Raw components, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Components reinterpreted as native-endian bytes for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Bytes in one row of the byte view.
    pub fn bytes_per_row(&self) -> u32 {
        self.width * (CHANNELS * std::mem::size_of::<f32>()) as u32
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_cleared() {
        let buffer = PixelBuffer::new(8, 4);
        assert_eq!(buffer.as_slice().len(), 8 * 4 * CHANNELS);
        assert!(buffer.as_slice().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_set_pixel_row_major_layout() {
        let mut buffer = PixelBuffer::new(8, 4);
        buffer.set_pixel(3, 2, RED);

        let offset = (2 * 8 + 3) * CHANNELS;
        assert_eq!(&buffer.as_slice()[offset..offset + CHANNELS], &RED);
        assert_eq!(buffer.pixel(3, 2), Some(RED));
        assert_eq!(buffer.count_matching(RED), 1);
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut buffer = PixelBuffer::new(8, 4);
        let before = buffer.clone();

        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 4), (i64::MAX, i64::MIN)] {
            buffer.set_pixel(x, y, RED);
            assert_eq!(buffer.pixel(x, y), None);
        }

        assert_eq!(buffer, before);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut buffer = PixelBuffer::new(16, 16);
        buffer.set_pixel(1, 1, RED);
        buffer.set_pixel(15, 15, RED);

        buffer.clear();
        let once = buffer.clone();
        buffer.clear();

        assert_eq!(buffer, once);
        assert_eq!(buffer.count_matching(RED), 0);
        assert!(buffer.as_slice().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_byte_view_matches_texture_layout() {
        let buffer = PixelBuffer::new(320, 200);
        assert_eq!(buffer.bytes_per_row(), 320 * 16);
        assert_eq!(buffer.as_bytes().len(), (buffer.bytes_per_row() * 200) as usize);
    }

    #[test]
    fn test_zero_sized_buffer() {
        let mut buffer = PixelBuffer::new(0, 0);
        buffer.set_pixel(0, 0, RED);
        buffer.clear();
        assert!(buffer.as_slice().is_empty());
    }
}
