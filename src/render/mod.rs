//! Software rasterization of colored triangle meshes.
//!
//! Dependency order, leaves first:
//! - [`barycentric`]: weights of a point against a triangle and the color blend
//! - [`rasterizer`]: scanline traversal of one triangle into a [`FrameBuffer`]
//! - [`renderer`]: owns the pixel buffer and paints a whole mesh per frame

pub mod barycentric;
pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;

pub use barycentric::Barycentric;
pub use framebuffer::FrameBuffer;
pub use rasterizer::{Lean, Rasterizer, ScanlineRasterizer};
pub use renderer::{Frame, FrameRenderer};
