use std::ops::{Add, Mul, Sub};

/// A point or direction in 2D screen space.
///
/// Screen space has its origin at the top-left corner with `y` growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(&self) -> f32 {
        self.dot(*self).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dot_of_perpendicular_vectors_is_zero() {
        assert_eq!(Vec2::new(1.0, 0.0).dot(Vec2::new(0.0, 3.0)), 0.0);
    }

    #[test]
    fn sub_then_add_restores_point() {
        let a = Vec2::new(3.5, -2.0);
        let b = Vec2::new(1.0, 4.0);
        assert_eq!((a - b) + b, a);
    }

    #[test]
    fn length_of_three_four_is_five() {
        assert_relative_eq!(Vec2::new(3.0, 4.0).length(), 5.0, epsilon = 1e-6);
    }
}
