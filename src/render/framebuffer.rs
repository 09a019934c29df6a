//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a bounds-checked view into an RGBA8 color buffer. Writes outside
//! the buffer are dropped, so rasterizers can hand over any coordinate without
//! clipping first.

/// Bytes per RGBA8 sample.
pub const BYTES_PER_PIXEL: usize = 4;

/// A mutable view into a row-major RGBA8 buffer with its origin at the top-left.
///
/// This is a borrowed view, not an owning type. It is created for the duration
/// of a fill so rasterizers can write pixels without knowing who owns the memory.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view over `pixels`.
    ///
    /// # Panics
    /// Panics in debug builds if the slice length is not `width * height * 4`.
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * BYTES_PER_PIXEL,
            "Pixel buffer size doesn't match dimensions"
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some((x as usize + y as usize * self.width as usize) * BYTES_PER_PIXEL)
        } else {
            None
        }
    }

    /// Overwrite the pixel at (x, y). Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| {
            let mut rgba = [0; 4];
            rgba.copy_from_slice(&self.pixels[i..i + BYTES_PER_PIXEL]);
            rgba
        })
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pixel_writes_row_major_rgba() {
        let mut bytes = vec![0u8; 3 * 2 * BYTES_PER_PIXEL];
        let mut fb = FrameBuffer::new(&mut bytes, 3, 2);
        fb.set_pixel(1, 1, [1, 2, 3, 4]);
        assert_eq!(fb.get_pixel(1, 1), Some([1, 2, 3, 4]));
        assert_eq!(&bytes[16..20], &[1, 2, 3, 4]);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut bytes = vec![0u8; 2 * 2 * BYTES_PER_PIXEL];
        let mut fb = FrameBuffer::new(&mut bytes, 2, 2);
        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2), (i32::MAX, i32::MAX)] {
            fb.set_pixel(x, y, [255; 4]);
            assert_eq!(fb.get_pixel(x, y), None);
        }
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_sized_buffer_accepts_nothing() {
        let mut bytes = Vec::new();
        let mut fb = FrameBuffer::new(&mut bytes, 0, 0);
        fb.set_pixel(0, 0, [255; 4]);
        assert_eq!(fb.get_pixel(0, 0), None);
    }
}
