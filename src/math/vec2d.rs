// src/math/vec2d.rs

use crate::types::Vec2d;
use std::ops::{Add, Mul, Sub};

impl Add for Vec2d {
  type Output = Vec2d;

  #[inline]
  fn add(self, rhs: Vec2d) -> Vec2d {
    Vec2d {
      x: self.x + rhs.x,
      y: self.y + rhs.y,
    }
  }
}

impl Sub for Vec2d {
  type Output = Vec2d;

  #[inline]
  fn sub(self, rhs: Vec2d) -> Vec2d {
    Vec2d {
      x: self.x - rhs.x,
      y: self.y - rhs.y,
    }
  }
}

impl Mul<f64> for Vec2d {
  type Output = Vec2d;

  #[inline]
  fn mul(self, s: f64) -> Vec2d {
    Vec2d {
      x: self.x * s,
      y: self.y * s,
    }
  }
}

impl Vec2d {
  /// Creates a vector from its components.
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Checks if two 2D vectors are within `threshold` of each other on both axes.
#[cfg(test)]
#[inline]
#[must_use]
pub(crate) fn _v2d_almost_equals_threshold(v1: &Vec2d, v2: &Vec2d, threshold: f64) -> bool {
  (v1.x - v2.x).abs() < threshold && (v1.y - v2.y).abs() < threshold
}
