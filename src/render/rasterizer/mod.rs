//! Triangle rasterization.
//!
//! A rasterizer turns one [`Triangle`] into pixel writes on a [`FrameBuffer`].
//! The only implementation is [`ScanlineRasterizer`], which walks the triangle
//! row by row and colors each covered pixel through barycentric interpolation.

mod scanline;

pub use scanline::{Lean, ScanlineRasterizer};

use super::framebuffer::FrameBuffer;
use crate::mesh::Triangle;

/// Trait for triangle rasterization algorithms.
///
/// Implementors must not modify the triangle and must drop any pixel that
/// falls outside the buffer.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer, overwriting what is already there.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer<'_>);
}
