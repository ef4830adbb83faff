// src/math/vec3d.rs

use crate::types::{LatLng, Vec3d};
use std::ops::{Add, Mul, Neg, Sub};

impl Add for Vec3d {
  type Output = Vec3d;

  #[inline]
  fn add(self, rhs: Vec3d) -> Vec3d {
    Vec3d {
      x: self.x + rhs.x,
      y: self.y + rhs.y,
      z: self.z + rhs.z,
    }
  }
}

impl Sub for Vec3d {
  type Output = Vec3d;

  #[inline]
  fn sub(self, rhs: Vec3d) -> Vec3d {
    Vec3d {
      x: self.x - rhs.x,
      y: self.y - rhs.y,
      z: self.z - rhs.z,
    }
  }
}

impl Mul<f64> for Vec3d {
  type Output = Vec3d;

  #[inline]
  fn mul(self, s: f64) -> Vec3d {
    Vec3d {
      x: self.x * s,
      y: self.y * s,
      z: self.z * s,
    }
  }
}

impl Neg for Vec3d {
  type Output = Vec3d;

  #[inline]
  fn neg(self) -> Vec3d {
    self * -1.0
  }
}

impl Vec3d {
  /// Creates a vector from its components.
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }
}

/// Dot product.
#[inline]
#[must_use]
pub(crate) fn _v3d_dot(v1: &Vec3d, v2: &Vec3d) -> f64 {
  v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Cross product `v1 x v2`.
#[inline]
#[must_use]
pub(crate) fn _v3d_cross(v1: &Vec3d, v2: &Vec3d) -> Vec3d {
  Vec3d {
    x: v1.y * v2.z - v1.z * v2.y,
    y: v1.z * v2.x - v1.x * v2.z,
    z: v1.x * v2.y - v1.y * v2.x,
  }
}

/// Determinant of the matrix whose columns are `v0, v1, v2`, i.e. the
/// scalar triple product `v0 . (v1 x v2)`.
#[inline]
#[must_use]
pub(crate) fn _v3d_det(v0: &Vec3d, v1: &Vec3d, v2: &Vec3d) -> f64 {
  _v3d_dot(v0, &_v3d_cross(v1, v2))
}

/// Euclidean norm.
#[inline]
#[must_use]
pub(crate) fn _v3d_mag(v: &Vec3d) -> f64 {
  _v3d_dot(v, v).sqrt()
}

/// Scales `v` to unit length. A zero vector is returned unchanged.
#[inline]
#[must_use]
pub(crate) fn _v3d_normalize(v: &Vec3d) -> Vec3d {
  let mag = _v3d_mag(v);
  if mag > 0.0 {
    *v * (1.0 / mag)
  } else {
    *v
  }
}

/// Calculate the square of the Euclidean distance between two 3D coordinates.
#[inline]
#[must_use]
pub(crate) fn _point_square_dist(v1: &Vec3d, v2: &Vec3d) -> f64 {
  let d = *v1 - *v2;
  _v3d_dot(&d, &d)
}

/// Angle in radians between two vectors, stable for nearly parallel and
/// nearly antipodal inputs.
#[inline]
#[must_use]
pub(crate) fn _v3d_angle(v1: &Vec3d, v2: &Vec3d) -> f64 {
  _v3d_mag(&_v3d_cross(v1, v2)).atan2(_v3d_dot(v1, v2))
}

/// Spherical linear interpolation between the unit vectors `v0` (at `t = 0`)
/// and `v1` (at `t = 1`).
///
/// Falls back to `v0` when the two inputs coincide.
#[must_use]
pub(crate) fn _v3d_slerp(v0: &Vec3d, v1: &Vec3d, t: f64) -> Vec3d {
  let omega = _v3d_angle(v0, v1);
  let sin_omega = omega.sin();
  if sin_omega.abs() < f64::EPSILON {
    return *v0;
  }
  *v0 * (((1.0 - t) * omega).sin() / sin_omega) + *v1 * ((t * omega).sin() / sin_omega)
}

/// Solves `K0 c0 + K1 c1 + K2 c2 = rhs` for `K` by Cramer's rule.
///
/// Returns `None` when the columns are linearly dependent.
#[must_use]
pub(crate) fn _v3d_solve(c0: &Vec3d, c1: &Vec3d, c2: &Vec3d, rhs: &Vec3d) -> Option<[f64; 3]> {
  let det = _v3d_det(c0, c1, c2);
  if det.abs() < f64::EPSILON {
    return None;
  }
  Some([
    _v3d_det(rhs, c1, c2) / det,
    _v3d_det(c0, rhs, c2) / det,
    _v3d_det(c0, c1, rhs) / det,
  ])
}

/// Calculate the 3D Cartesian coordinate on a unit sphere from latitude and longitude.
///
/// # Arguments
///
/// * `geo` - The latitude and longitude of the point (in radians).
#[inline]
#[must_use]
pub(crate) fn _geo_to_vec3d(geo: &LatLng) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d {
    x: geo.lng.cos() * r,
    y: geo.lng.sin() * r,
    z: geo.lat.sin(),
  }
}

/// Calculate latitude and longitude (radians) of a 3D point.
///
/// The input does not need to be normalized. Latitude is taken with `atan2`
/// so that points close to the poles keep full precision.
#[inline]
#[must_use]
pub(crate) fn _vec3d_to_geo(v: &Vec3d) -> LatLng {
  LatLng {
    lat: v.z.atan2(v.x.hypot(v.y)),
    lng: v.y.atan2(v.x),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{EPSILON_RAD, M_PI_2};

  #[test]
  fn test_point_square_dist() {
    let v1 = Vec3d::new(0.0, 0.0, 0.0);
    let v2 = Vec3d::new(1.0, 0.0, 0.0);
    let v3 = Vec3d::new(0.0, 1.0, 1.0);
    let v5 = Vec3d::new(1.0, 1.0, 2.0);

    assert!((_point_square_dist(&v1, &v1)).abs() < f64::EPSILON, "distance to self is 0");
    assert!((_point_square_dist(&v1, &v2) - 1.0).abs() < f64::EPSILON);
    assert!((_point_square_dist(&v1, &v3) - 2.0).abs() < f64::EPSILON);
    assert!((_point_square_dist(&v1, &v5) - 6.0).abs() < f64::EPSILON);
  }

  #[test]
  fn test_cross_and_det() {
    let x = Vec3d::new(1.0, 0.0, 0.0);
    let y = Vec3d::new(0.0, 1.0, 0.0);
    let z = Vec3d::new(0.0, 0.0, 1.0);
    assert_eq!(_v3d_cross(&x, &y), z);
    assert!((_v3d_det(&x, &y, &z) - 1.0).abs() < f64::EPSILON, "right-handed basis");
    assert!((_v3d_det(&y, &x, &z) + 1.0).abs() < f64::EPSILON, "swapped columns flip sign");
  }

  #[test]
  fn test_slerp_midpoint() {
    let x = Vec3d::new(1.0, 0.0, 0.0);
    let y = Vec3d::new(0.0, 1.0, 0.0);
    let mid = _v3d_slerp(&x, &y, 0.5);
    let h = std::f64::consts::FRAC_1_SQRT_2;
    assert!((mid.x - h).abs() < 1e-15 && (mid.y - h).abs() < 1e-15 && mid.z.abs() < 1e-15);
    assert_eq!(_v3d_slerp(&x, &x, 0.3), x, "coincident ends return the start");
  }

  #[test]
  fn test_solve() {
    let c0 = Vec3d::new(2.0, 0.0, 0.0);
    let c1 = Vec3d::new(0.0, 1.0, 1.0);
    let c2 = Vec3d::new(0.0, -1.0, 1.0);
    let rhs = c0 * 0.5 + c1 * 3.0 - c2;
    let k = _v3d_solve(&c0, &c1, &c2, &rhs).expect("independent columns");
    assert!((k[0] - 0.5).abs() < 1e-14);
    assert!((k[1] - 3.0).abs() < 1e-14);
    assert!((k[2] + 1.0).abs() < 1e-14);
    assert!(_v3d_solve(&c0, &c0, &c2, &rhs).is_none());
  }

  #[test]
  fn test_geo_to_vec3d() {
    let origin = Vec3d::default();

    let p1 = _geo_to_vec3d(&LatLng { lat: 0.0, lng: 0.0 });
    assert!((_point_square_dist(&origin, &p1) - 1.0).abs() < EPSILON_RAD);
    assert!((p1.x - 1.0).abs() < f64::EPSILON);

    let p2 = _geo_to_vec3d(&LatLng { lat: M_PI_2, lng: 0.0 }); // North Pole
    assert!((p2.z - 1.0).abs() < f64::EPSILON);
    assert!((_point_square_dist(&p1, &p2) - 2.0).abs() < EPSILON_RAD);
  }

  #[test]
  fn test_vec3d_to_geo_round_trip() {
    let geo = LatLng { lat: 0.4, lng: -2.1 };
    let back = _vec3d_to_geo(&_geo_to_vec3d(&geo));
    assert!((back.lat - geo.lat).abs() < 1e-15);
    assert!((back.lng - geo.lng).abs() < 1e-15);

    // Unnormalized input
    let pole = _vec3d_to_geo(&Vec3d::new(0.0, 0.0, 5.0));
    assert!((pole.lat - M_PI_2).abs() < f64::EPSILON);
  }
}
