//! Barycentric color interpolation.
//!
//! Any point `P` in the plane of a triangle `ABC` can be written as
//!
//! ```text
//! P = u*A + v*B + w*C    with u + v + w = 1
//! ```
//!
//! The weights are found by solving the 2x2 system built from the edge vectors
//! `C - A` and `B - A`. A point lies inside the triangle iff all three weights
//! are non-negative, and the same weights blend the per-vertex colors.

use crate::colors::Color;
use crate::math::vec2::Vec2;

/// Barycentric weights of a point against a triangle `(A, B, C)`.
///
/// `u` weighs `A`, `v` weighs `B` and `w` weighs `C`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentric {
    pub u: f32,
    pub v: f32,
    pub w: f32,
    pub is_outside: bool,
}

impl Barycentric {
    /// Returned for collinear or zero-area triangles. Such a triangle covers no pixels.
    pub const OUTSIDE: Self = Self {
        u: -2.0,
        v: -1.0,
        w: -1.0,
        is_outside: true,
    };

    /// Compute the weights of `point` relative to `a`, `b` and `c`.
    ///
    /// `point` does not need to lie inside the triangle.
    pub fn compute(point: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Self {
        let v0 = c - a;
        let v1 = b - a;
        let v2 = point - a;

        let dot00 = v0.dot(v0);
        let dot01 = v0.dot(v1);
        let dot02 = v0.dot(v2);
        let dot11 = v1.dot(v1);
        let dot12 = v1.dot(v2);

        let denom = dot00 * dot11 - dot01 * dot01;
        if denom == 0.0 {
            return Self::OUTSIDE;
        }

        let inv_denom = 1.0 / denom;
        let w = (dot11 * dot02 - dot01 * dot12) * inv_denom;
        let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;
        let u = 1.0 - w - v;

        Self {
            u,
            v,
            w,
            is_outside: u < 0.0 || v < 0.0 || w < 0.0,
        }
    }

    /// Blend three vertex colors channel by channel.
    ///
    /// No clamping happens here.
    #[inline]
    pub fn blend(&self, colors: &[Color; 3]) -> Color {
        let [a, b, c] = colors;
        Color::new(
            self.u * a.r + self.v * b.r + self.w * c.r,
            self.u * a.g + self.v * b.g + self.w * c.g,
            self.u * a.b + self.v * b.b + self.w * c.b,
            self.u * a.a + self.v * b.a + self.w * c.a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const A: Vec2 = Vec2::new(0.0, 0.0);
    const B: Vec2 = Vec2::new(4.0, 0.0);
    const C: Vec2 = Vec2::new(0.0, 4.0);

    fn weights(p: Vec2) -> [f32; 3] {
        let bc = Barycentric::compute(p, A, B, C);
        [bc.u, bc.v, bc.w]
    }

    #[test]
    fn vertices_map_to_unit_weights() {
        assert_eq!(weights(A), [1.0, 0.0, 0.0]);
        assert_eq!(weights(B), [0.0, 1.0, 0.0]);
        assert_eq!(weights(C), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn weights_sum_to_one_inside_and_outside() {
        for p in [
            Vec2::new(1.0, 1.0),
            Vec2::new(4.0 / 3.0, 4.0 / 3.0),
            Vec2::new(-7.5, 2.0),
            Vec2::new(100.0, -40.0),
        ] {
            let bc = Barycentric::compute(p, A, B, C);
            assert_relative_eq!(bc.u + bc.v + bc.w, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn inside_and_outside_classification() {
        assert!(!Barycentric::compute(Vec2::new(1.0, 1.0), A, B, C).is_outside);
        assert!(Barycentric::compute(Vec2::new(3.0, 3.0), A, B, C).is_outside);
        assert!(Barycentric::compute(Vec2::new(-1.0, 0.0), A, B, C).is_outside);
    }

    #[test]
    fn centroid_has_equal_weights() {
        let bc = Barycentric::compute(Vec2::new(4.0 / 3.0, 4.0 / 3.0), A, B, C);
        assert_relative_eq!(bc.u, 1.0 / 3.0, epsilon = 1e-5);
        assert_relative_eq!(bc.v, 1.0 / 3.0, epsilon = 1e-5);
        assert_relative_eq!(bc.w, 1.0 / 3.0, epsilon = 1e-5);
    }

    #[test]
    fn collinear_triangle_is_always_outside() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 1.0);
        let c = Vec2::new(2.0, 2.0);
        for p in [a, b, c, Vec2::new(0.5, 0.5), Vec2::new(3.0, 0.0)] {
            assert_eq!(Barycentric::compute(p, a, b, c), Barycentric::OUTSIDE);
        }
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Vec2::new(3.0, 3.0);
        assert!(Barycentric::compute(p, p, p, p).is_outside);
    }

    #[test]
    fn blend_weights_each_vertex_color() {
        let colors = [
            Color::rgba(255, 0, 0, 255),
            Color::rgba(0, 255, 0, 255),
            Color::rgba(0, 0, 255, 255),
        ];
        let bc = Barycentric {
            u: 0.5,
            v: 0.25,
            w: 0.25,
            is_outside: false,
        };
        let blended = bc.blend(&colors);
        assert_relative_eq!(blended.r, 127.5);
        assert_relative_eq!(blended.g, 63.75);
        assert_relative_eq!(blended.b, 63.75);
        assert_relative_eq!(blended.a, 255.0);
    }

    #[test]
    fn blend_does_not_clamp() {
        let colors = [Color::rgba(255, 255, 255, 255); 3];
        let bc = Barycentric {
            u: 1.5,
            v: -0.25,
            w: -0.25,
            is_outside: true,
        };
        assert_relative_eq!(bc.blend(&colors).r, 255.0, epsilon = 1e-4);

        let bc = Barycentric {
            u: 2.0,
            v: 0.0,
            w: 0.0,
            is_outside: false,
        };
        assert_relative_eq!(bc.blend(&colors).g, 510.0);
    }
}
