// src/coords/abc.rs

//! Triangular `(a, b, c)` hexagon coordinates and their relation to the
//! face-local plane.
//!
//! The face triangle has its vertices at `(0, m, m)`, `(m, 0, m)` and
//! `(m, m, 0)` where `m = n + 1`. Cell centers are the integer triples summing
//! to `2m`; polygon corners are fractional triples with the same sum.

use crate::constants::{M_SQRT3, M_SQRT3_2};
use crate::types::{CoordABC, CoordOffset, GridError, Vec2d};
use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Scalar a coordinate triple can be made of: integers for cell centers,
/// floats for polygon corners.
pub(crate) trait TripleScalar: Copy + Debug + PartialOrd + Add<Output = Self> + Sub<Output = Self> {}

impl TripleScalar for i64 {}
impl TripleScalar for f64 {}

/// One output component of a [`TriTransform`], as a function of the input
/// triple `v` and the face size `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Term {
  /// `v[i]`
  Keep(usize),
  /// `m - v[i]`
  Flip(usize),
  /// `2m - v[i]`
  Fold(usize),
}

impl Term {
  #[inline]
  fn apply<T: TripleScalar>(self, v: &[T; 3], m: T) -> T {
    match self {
      Term::Keep(i) => v[i],
      Term::Flip(i) => m - v[i],
      Term::Fold(i) => m + m - v[i],
    }
  }
}

/// Affine rewrite of a coordinate triple, one [`Term`] per output component.
pub(crate) type TriTransform = [Term; 3];

pub(crate) const IDENTITY: TriTransform = [Term::Keep(0), Term::Keep(1), Term::Keep(2)];

#[inline]
pub(crate) fn _apply_transform<T: TripleScalar>(t: &TriTransform, v: &[T; 3], m: T) -> [T; 3] {
  [t[0].apply(v, m), t[1].apply(v, m), t[2].apply(v, m)]
}

impl CoordABC {
  /// Creates a coordinate triple.
  #[inline]
  #[must_use]
  pub const fn new(a: i64, b: i64, c: i64) -> Self {
    Self { a, b, c }
  }

  /// `a + b + c`, which is `2 * (n + 1)` for a cell of resolution `n`.
  #[inline]
  #[must_use]
  pub const fn sum(&self) -> i64 {
    self.a + self.b + self.c
  }

  /// Components as an array.
  #[inline]
  #[must_use]
  pub const fn to_array(self) -> [i64; 3] {
    [self.a, self.b, self.c]
  }

  /// Builds a triple from an array.
  #[inline]
  #[must_use]
  pub const fn from_array(v: [i64; 3]) -> Self {
    Self {
      a: v[0],
      b: v[1],
      c: v[2],
    }
  }

  /// Adds `offset` component-wise, without any range check.
  ///
  /// Fails with `InvalidOffset` if a component overflows.
  pub fn offset(self, offset: CoordOffset) -> Result<Self, GridError> {
    let add = |v: i64, d: i64| v.checked_add(d).ok_or(GridError::InvalidOffset);
    Ok(Self {
      a: add(self.a, offset.i)?,
      b: add(self.b, offset.j)?,
      c: add(self.c, offset.k)?,
    })
  }

  /// Multiplies every component by `factor`.
  #[inline]
  #[must_use]
  pub const fn scale(self, factor: i64) -> Self {
    Self {
      a: self.a * factor,
      b: self.b * factor,
      c: self.c * factor,
    }
  }
}

impl CoordOffset {
  /// Creates an offset.
  #[inline]
  #[must_use]
  pub const fn new(i: i64, j: i64, k: i64) -> Self {
    Self { i, j, k }
  }

  /// Returns the offset if its components sum to zero.
  pub fn balanced(i: i64, j: i64, k: i64) -> Result<Self, GridError> {
    let offset = Self { i, j, k };
    if offset.is_balanced() {
      Ok(offset)
    } else {
      Err(GridError::InvalidOffset)
    }
  }

  /// Whether the offset keeps the coordinate sum unchanged.
  #[inline]
  #[must_use]
  pub fn is_balanced(&self) -> bool {
    i128::from(self.i) + i128::from(self.j) + i128::from(self.k) == 0
  }

  /// Hexagonal step distance covered by the offset, saturating at `i64::MAX`.
  #[inline]
  #[must_use]
  pub fn step_radius(&self) -> i64 {
    let r = self.i.unsigned_abs().max(self.j.unsigned_abs()).max(self.k.unsigned_abs());
    i64::try_from(r).unwrap_or(i64::MAX)
  }
}

/// Every balanced offset with `step_radius() == radius`, in lexicographic
/// `(i, j)` order. Radius 0 yields the null offset alone.
#[must_use]
pub(crate) fn _offsets_at_radius(radius: i64) -> Vec<CoordOffset> {
  let mut out = Vec::with_capacity(if radius == 0 { 1 } else { 6 * radius as usize });
  for i in -radius..=radius {
    for j in -radius..=radius {
      let offset = CoordOffset::new(i, j, -i - j);
      if offset.step_radius() == radius {
        out.push(offset);
      }
    }
  }
  out
}

/// Triangular coordinates of a face-local point: its projections on the three
/// oriented face edges, shifted so that the face spans `[0, 2]` on each axis
/// and its center sits at `(1, 1, 1)`.
#[inline]
#[must_use]
pub(crate) fn _face_point_to_triangular(p: &Vec2d) -> [f64; 3] {
  [
    -0.5 * p.x + M_SQRT3_2 * p.y + 1.0,
    -0.5 * p.x - M_SQRT3_2 * p.y + 1.0,
    p.x + 1.0,
  ]
}

/// Unit directions of the three triangular axes in the face plane.
pub(crate) const TRIANGULAR_AXES: [Vec2d; 3] = [
  Vec2d { x: -0.5, y: M_SQRT3_2 },
  Vec2d { x: -0.5, y: -M_SQRT3_2 },
  Vec2d { x: 1.0, y: 0.0 },
];

/// Hexagon containing a point given in triangular coordinates, on a face of
/// size `m`.
///
/// The result is not range checked: points pushed past a face edge yield
/// triples with components above `m` or below 0.
#[must_use]
pub(crate) fn _triangular_to_abc(xyz: &[f64; 3], m: i64) -> CoordABC {
  let n2 = 2 * m - 1;
  let scale = m as f64;
  // Truncation toward zero, then floor division.
  let u = (xyz[0] * scale) as i64;
  let v = (xyz[1] * scale) as i64;
  let w = (xyz[2] * scale) as i64;

  let a = (2 + n2 - v + w).div_euclid(3);
  let b = (2 + n2 - w + u).div_euclid(3);
  CoordABC::new(a, b, n2 + 1 - a - b)
}

/// Face-local position of a (possibly fractional) triple on a face of size `m`.
#[inline]
#[must_use]
pub(crate) fn _abc_to_face_point(pos: &[f64; 3], m: f64) -> Vec2d {
  let scale = 2.0 * M_SQRT3 / (3.0 * m);
  Vec2d::new(
    scale * M_SQRT3_2 * (pos[0] - pos[1]),
    scale * (0.5 * pos[0] + 0.5 * pos[1] - pos[2]),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_transforms() {
    let v = [1_i64, 5, 6];
    assert_eq!(_apply_transform(&IDENTITY, &v, 6), v);
    let t = [Term::Flip(2), Term::Fold(0), Term::Flip(1)];
    assert_eq!(_apply_transform(&t, &v, 6), [0, 11, 1]);
    let vf = [0.5_f64, 5.5, 6.0];
    assert_eq!(_apply_transform(&t, &vf, 6.0), [0.0, 11.5, 0.5]);
  }

  #[test]
  fn test_offsets_at_radius() {
    assert_eq!(_offsets_at_radius(0), vec![CoordOffset::new(0, 0, 0)]);
    for r in 1..5 {
      let ring = _offsets_at_radius(r);
      assert_eq!(ring.len() as i64, 6 * r);
      assert!(ring.iter().all(|o| o.is_balanced() && o.step_radius() == r));
    }
    assert_eq!(CoordOffset::balanced(1, 1, 1), Err(GridError::InvalidOffset));
  }

  #[test]
  fn test_offset_overflow() {
    let huge = CoordOffset::new(i64::MAX, i64::MIN + 1, 0);
    assert!(huge.is_balanced());
    assert_eq!(huge.step_radius(), i64::MAX);
    assert_eq!(CoordABC::new(18, 18, 36).offset(huge), Err(GridError::InvalidOffset));
    assert!(CoordOffset::new(i64::MAX, 1, i64::MIN).is_balanced());
    assert!(!CoordOffset::new(i64::MAX, i64::MAX, 0).is_balanced());
    assert_eq!(CoordOffset::new(i64::MIN, 0, 0).step_radius(), i64::MAX);
    assert_eq!(
      CoordABC::new(1, 2, 3).offset(CoordOffset::new(1, -1, 0)),
      Ok(CoordABC::new(2, 1, 3))
    );
  }

  #[test]
  fn test_vertices_and_center() {
    // Face center.
    let center = _face_point_to_triangular(&Vec2d::new(0.0, 0.0));
    assert_eq!(center, [1.0, 1.0, 1.0]);
    let p = _abc_to_face_point(&[4.0, 4.0, 4.0], 6.0);
    assert!(p.x.abs() < 1e-15 && p.y.abs() < 1e-15);

    let vertex_a = _abc_to_face_point(&[0.0, 6.0, 6.0], 6.0);
    let tri = _face_point_to_triangular(&vertex_a);
    assert!((tri[0] - 1.0).abs() < 1e-15 && (tri[1] - 2.0).abs() < 1e-15 && tri[2].abs() < 1e-15, "{tri:?}");
  }

  #[test]
  fn test_center_round_trip() {
    let m = 12;
    for a in 1..m {
      for b in 1..m {
        let c = 2 * m - a - b;
        if c <= 0 || c >= m {
          continue;
        }
        let p = _abc_to_face_point(&[a as f64, b as f64, c as f64], m as f64);
        let back = _triangular_to_abc(&_face_point_to_triangular(&p), m);
        assert_eq!(back, CoordABC::new(a, b, c));
      }
    }
  }
}
