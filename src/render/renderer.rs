//! Frame rendering.
//!
//! Provides the [`FrameRenderer`] struct which owns the pixel buffer and paints
//! a whole mesh into it, and [`Frame`], the read-only view of a finished render.

use std::path::Path;
use std::time::Instant;

use super::framebuffer::{FrameBuffer, BYTES_PER_PIXEL};
use super::rasterizer::{Rasterizer, ScanlineRasterizer};
use crate::error::Result;
use crate::mesh::Triangle;

/// Renders meshes into an RGBA8 buffer of fixed size.
///
/// Construct once per output surface and reuse it across frames; the buffer is
/// cleared at the start of every [`render`](Self::render).
pub struct FrameRenderer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    rasterizer: ScanlineRasterizer,
}

impl FrameRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; buffer_len(width, height)],
            width,
            height,
            rasterizer: ScanlineRasterizer::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = vec![0; buffer_len(width, height)];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Paint `triangles` in order into a cleared buffer and return the finished frame.
    ///
    /// Later triangles overwrite earlier ones where they overlap. There is no
    /// depth test and no blending between triangles.
    pub fn render(&mut self, triangles: &[Triangle]) -> Frame<'_> {
        let started = Instant::now();

        let mut fb = FrameBuffer::new(&mut self.pixels, self.width, self.height);
        fb.clear();
        for triangle in triangles {
            self.rasterizer.fill_triangle(triangle, &mut fb);
        }

        log::debug!(
            "Rendered {} triangles at {}x{} in {:?}",
            triangles.len(),
            self.width,
            self.height,
            started.elapsed()
        );

        Frame {
            pixels: &self.pixels,
            width: self.width,
            height: self.height,
        }
    }
}

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

/// A completed render: row-major RGBA8 with the origin at the top-left.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> Frame<'a> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.pixels
    }

    /// Get the RGBA sample at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (x as usize + y as usize * self.width as usize) * BYTES_PER_PIXEL;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[i..i + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    /// Copy the frame into an owned image.
    pub fn to_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec())
    }

    /// Encode the frame as PNG at `path`.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            self.pixels,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        log::info!("Wrote {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}
