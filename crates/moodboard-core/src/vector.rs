//! Minimal 2D vector.

use std::ops::{Add, AddAssign};

/// A 2D point or velocity in canvas units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit-length heading scaled by `length`.
    pub fn from_angle(angle: f32, length: f32) -> Self {
        Self::new(angle.cos() * length, angle.sin() * length)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

/// In-place componentwise sum; this is how entities move.
impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        self.x += other.x;
        self.y += other.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_in_place() {
        let mut v = Vector2::new(1.0, -2.0);
        v += Vector2::new(0.5, 4.0);
        assert_eq!(v, Vector2::new(1.5, 2.0));
        assert_eq!(v + Vector2::new(1.0, 1.0), Vector2::new(2.5, 3.0));
        v += Vector2::new(-1.5, -2.0);
        assert_eq!(v, Vector2::default());
    }

    #[test]
    fn test_from_angle() {
        let v = Vector2::from_angle(std::f32::consts::FRAC_PI_2, 3.0);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 3.0).abs() < 1e-5);
    }
}
