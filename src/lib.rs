//! A CPU gradient-mesh renderer.
//!
//! Triangles carry one color per vertex. The renderer scan-converts each
//! triangle into an RGBA8 buffer and fills it by barycentric interpolation of
//! the vertex colors. Triangles are painted in order, so later triangles
//! overwrite earlier ones. SDL2 is only used by the demo to show finished frames.
//!
//! # Quick Start
//!
//! ```
//! use gradient_mesh::prelude::*;
//!
//! let triangle = Triangle::new(
//!     Vertex::new(0.0, 0.0, Color::rgba(255, 0, 0, 255)),
//!     Vertex::new(4.0, 0.0, Color::rgba(0, 255, 0, 255)),
//!     Vertex::new(0.0, 4.0, Color::rgba(0, 0, 255, 255)),
//! );
//!
//! let mut renderer = FrameRenderer::new(5, 5);
//! let frame = renderer.render(&[triangle]);
//! assert_eq!(frame.pixel(0, 0), Some([255, 0, 0, 255]));
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod error;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use error::{Error, Result};
pub use mesh::{Mesh, Triangle, Vertex};
pub use render::{Frame, FrameRenderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use gradient_mesh::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::colors::Color;
    pub use crate::math::vec2::Vec2;
    pub use crate::mesh::{Mesh, Triangle, Vertex};

    // Rendering
    pub use crate::render::{Barycentric, Frame, FrameRenderer};

    // Demo
    pub use crate::scene::Scene;
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{FrameBuffer, Rasterizer, ScanlineRasterizer};
}
