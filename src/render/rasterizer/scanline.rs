//! Scanline-based triangle rasterization.
//!
//! # Algorithm Overview
//!
//! The scanline algorithm processes a triangle one horizontal row at a time:
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space),
//!    giving `p1`, `p2` and `p3`
//! 2. **Classify** on which side of the long edge `p1 -> p3` the middle vertex sits
//! 3. **Walk rows** from `p1.y` to `p3.y`, finding the left and right edge for each
//!    row and filling the span between them
//!
//! # Lean
//!
//! The long edge `p1 -> p3` always bounds one side of every row. The other side
//! is `p1 -> p2` above the middle vertex and `p2 -> p3` below it.
//!
//! ```text
//!      p1                 p1
//!      |\                 /|
//!      | \ p2         p2 / |
//!      | /               \ |
//!      |/                 \|
//!      p3                 p3
//!
//!   Lean::Right        Lean::Left
//! ```
//!
//! # Coloring
//!
//! Each candidate pixel is colored by barycentric interpolation of the three
//! vertex colors. Pixels whose weights fall outside the triangle are skipped,
//! which also trims the slightly generous spans produced by truncating the
//! edge positions.

use super::Rasterizer;
use crate::math::vec2::Vec2;
use crate::mesh::Triangle;
use crate::render::barycentric::Barycentric;
use crate::render::framebuffer::FrameBuffer;

/// Which side of the long edge `p1 -> p3` the middle vertex lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lean {
    /// `p2` is left of the long edge, so the long edge bounds the right side of each row.
    Left,
    /// `p2` is right of the long edge, so the long edge bounds the left side of each row.
    Right,
}

impl Lean {
    /// Classify vertices already sorted by ascending Y.
    ///
    /// Compares the inverse slopes of `p1 -> p2` and `p1 -> p3`. When `p1` and `p2`
    /// share a row the slope of `p1 -> p2` is undefined and their X order decides.
    pub fn classify(p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        let right = if p2.y > p1.y {
            inverse_slope(p1, p2) > inverse_slope(p1, p3)
        } else {
            p2.x > p1.x
        };

        if right {
            Lean::Right
        } else {
            Lean::Left
        }
    }

    /// Left and right bounding edges for a row above (`upper`) or at/below the middle vertex.
    fn edges(self, upper: bool, p1: Vec2, p2: Vec2, p3: Vec2) -> (Edge, Edge) {
        let long = Edge::new(p1, p3);
        let short = if upper {
            Edge::new(p1, p2)
        } else {
            Edge::new(p2, p3)
        };

        match self {
            Lean::Left => (short, long),
            Lean::Right => (long, short),
        }
    }
}

/// Horizontal change per unit of vertical travel, or 0 for a horizontal edge.
#[inline]
fn inverse_slope(from: Vec2, to: Vec2) -> f32 {
    if to.y - from.y > 0.0 {
        (to.x - from.x) / (to.y - from.y)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    start: Vec2,
    end: Vec2,
}

impl Edge {
    fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// X position of the edge at row `y`, clamped to the edge's endpoints.
    #[inline]
    fn x_at(&self, y: f32) -> f32 {
        // Horizontal edges resolve to their end point
        let gradient = if self.start.y != self.end.y {
            (y - self.start.y) / (self.end.y - self.start.y)
        } else {
            1.0
        };
        self.start.x + (self.end.x - self.start.x) * gradient.clamp(0.0, 1.0)
    }
}

/// Scanline-based triangle rasterizer with barycentric color interpolation.
///
/// The rasterizer sorts a private copy of the vertex positions, so input
/// triangles can have vertices in any order and are never modified.
/// Rows and spans are clipped to the buffer before any pixel is visited.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Sorts positions by ascending Y. Equal Y values keep their input order.
    fn sort_vertices(positions: [Vec2; 3]) -> [Vec2; 3] {
        let mut sorted = positions;
        sorted.sort_by(|a, b| a.y.total_cmp(&b.y));
        sorted
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer<'_>) {
        let positions = triangle.vertices.map(|v| v.position);
        let colors = triangle.colors();
        let [a, b, c] = positions;

        let [p1, p2, p3] = Self::sort_vertices(positions);
        let lean = Lean::classify(p1, p2, p3);

        let width = i32::try_from(buffer.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(buffer.height()).unwrap_or(i32::MAX);

        let y_start = (p1.y.floor() as i32).max(0);
        let y_end = (p3.y.floor() as i32).min(height - 1);

        for y in y_start..=y_end {
            let row = y as f32;
            let (left, right) = lean.edges(row < p2.y, p1, p2, p3);

            let x_start = (left.x_at(row) as i32).max(0);
            let x_end = (right.x_at(row) as i32).min(width);

            for x in x_start..x_end {
                let coords = Barycentric::compute(Vec2::new(x as f32, row), a, b, c);
                if coords.is_outside {
                    continue;
                }
                buffer.set_pixel(x, y, coords.blend(&colors).to_rgba8());
            }
        }
    }
}
