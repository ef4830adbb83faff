// src/projection/snyder.rs

//! Snyder's equal-area polyhedral projection.
//!
//! Each face is split into six right triangles, each spanned by a face vertex
//! `v0`, the midpoint `v1` of an adjacent edge and the face center `v2`. A
//! point inside the spherical version of such a triangle is located by the
//! fraction `h` of the way from `v0` towards the far side, and the fraction
//! `A / A2` of the sub-triangle angle at `v0`. Both fractions are then applied
//! to the planar triangle, which keeps areas proportional.

use super::{_check_face_point, _check_unit_point, _lift_to_face_plane, _to_face_basis, Projection};
use crate::constants::{
  FACE_TO_CENTER, M_SQRT3_2, PHI, SNYDER_INV_VERTEX_EPSILON, SNYDER_SUBFACE_ANGLE, SNYDER_VERTEX_EPSILON,
  VERTEX_TO_CENTER,
};
use crate::icosahedron::{icosahedron, FaceGeometry};
use crate::math::vec3d::{_point_square_dist, _v3d_det, _v3d_dot, _v3d_normalize, _v3d_slerp, _v3d_solve};
use crate::types::{GridError, Vec2d, Vec3d};

/// Snyder equal-area projection onto the icosahedron faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnyderEqualArea {
  /// Signed volume `det(v0, v1, v2)` of the reference sub-triangle of face
  /// 0. Every sub-triangle is oriented to match its sign.
  volume: f64,
}

impl Default for SnyderEqualArea {
  fn default() -> Self {
    Self::new()
  }
}

/// Unit vector towards the midpoint of the edge `v0 v1`.
#[inline]
fn _edge_midpoint(v0: &Vec3d, v1: &Vec3d) -> Vec3d {
  (*v0 + *v1) * (VERTEX_TO_CENTER / (2.0 * PHI))
}

#[inline]
fn _clamped_acos(x: f64) -> f64 {
  x.clamp(-1.0, 1.0).acos()
}

/// Sub-triangle containing a point: nearest vertex, adjacent edge midpoint,
/// and whether `(v0, v1, normal)` already has the reference orientation.
struct SubTriangle {
  v0: Vec3d,
  v1: Vec3d,
  direct: bool,
}

impl SubTriangle {
  /// `order` holds the face vertex indices sorted by increasing closeness.
  fn from_order(geom: &FaceGeometry, order: [usize; 3]) -> Self {
    let v0 = geom.vertices[order[2]];
    Self {
      v0,
      v1: _edge_midpoint(&v0, &geom.vertices[order[1]]),
      direct: (order[1] + 3 - order[2]) % 3 == 1,
    }
  }
}

/// Face vertex indices sorted by increasing `key`. Ties keep index order.
#[inline]
fn _sorted_indices(key: [f64; 3]) -> [usize; 3] {
  let mut order = [0, 1, 2];
  order.sort_by(|&i, &j| key[i].total_cmp(&key[j]));
  order
}

impl SnyderEqualArea {
  /// Creates the projection, deriving its orientation from the icosahedron.
  #[must_use]
  pub fn new() -> Self {
    let geom = &icosahedron().faces()[0];
    let v0 = geom.vertices[0];
    let v1 = _edge_midpoint(&v0, &geom.vertices[1]);
    Self {
      volume: _v3d_det(&v0, &v1, &geom.normal),
    }
  }

  /// Barycentric weights of `point` in the spherical triangle `(v0, v1, v2)`:
  /// `1 - h` towards `v0`, the rest shared by `v1` and `v2` according to the
  /// angle of `point` around `v0`.
  fn _weights(&self, point: &Vec3d, v0: &Vec3d, v1: &Vec3d, v2: &Vec3d) -> [f64; 3] {
    // Intersection of the great circle through v0 and the point with the
    // great circle through v1 and v2.
    let d = _v3d_normalize(&(*point * self.volume - *v0 * _v3d_det(point, v1, v2)));
    let h = ((1.0 - _v3d_dot(v0, point)).max(0.0) / (1.0 - _v3d_dot(v0, &d))).sqrt();
    let angle = 2.0
      * (_v3d_det(v0, v1, &d) / (1.0 + _v3d_dot(v0, v1) + _v3d_dot(v1, &d) + _v3d_dot(v0, &d))).atan();
    let k2 = h * angle / SNYDER_SUBFACE_ANGLE;
    [1.0 - h, h - k2, k2]
  }
}

impl Projection for SnyderEqualArea {
  fn project(&self, point: &Vec3d, face: usize) -> Result<Vec2d, GridError> {
    let geom = icosahedron().face(face)?;
    _check_unit_point(point)?;

    let closeness = geom.vertices.map(|v| _v3d_dot(&v, point));
    let sub = SubTriangle::from_order(geom, _sorted_indices(closeness));
    let v2 = geom.normal;

    let planar = if 1.0 - _v3d_dot(&sub.v0, point) < SNYDER_VERTEX_EPSILON {
      sub.v0 * VERTEX_TO_CENTER
    } else if sub.direct {
      let k = self._weights(point, &sub.v0, &sub.v1, &v2);
      sub.v0 * (k[0] * VERTEX_TO_CENTER) + sub.v1 * (k[1] * PHI) + v2 * (k[2] * FACE_TO_CENTER)
    } else {
      let k = self._weights(point, &sub.v0, &v2, &sub.v1);
      sub.v0 * (k[0] * VERTEX_TO_CENTER) + v2 * (k[1] * FACE_TO_CENTER) + sub.v1 * (k[2] * PHI)
    };
    Ok(_to_face_basis(geom, &planar))
  }

  fn inv_project(&self, p: &Vec2d, face: usize) -> Result<Vec3d, GridError> {
    let geom = icosahedron().face(face)?;
    _check_face_point(p)?;

    // Components along the three bisectors; the largest one points away
    // from the nearest vertex.
    let bisectors = [M_SQRT3_2 * p.x + 0.5 * p.y, -M_SQRT3_2 * p.x + 0.5 * p.y, -p.y];
    let sub = SubTriangle::from_order(geom, _sorted_indices(bisectors.map(|b| -b)));

    let planar = _lift_to_face_plane(geom, p);
    let snap = SNYDER_INV_VERTEX_EPSILON * SNYDER_INV_VERTEX_EPSILON;
    if _point_square_dist(&planar, &(sub.v0 * VERTEX_TO_CENTER)) < snap {
      return Ok(sub.v0);
    }

    let v0 = sub.v0;
    let (v1, v2, k) = if sub.direct {
      let k = _v3d_solve(&(v0 * VERTEX_TO_CENTER), &(sub.v1 * PHI), &(geom.normal * FACE_TO_CENTER), &planar);
      (sub.v1, geom.normal, k)
    } else {
      let k = _v3d_solve(&(v0 * VERTEX_TO_CENTER), &(geom.normal * FACE_TO_CENTER), &(sub.v1 * PHI), &planar);
      (geom.normal, sub.v1, k)
    };
    let k = k.ok_or(GridError::DegenerateProjection)?;

    let c01 = _v3d_dot(&v0, &v1);
    let c12 = _v3d_dot(&v1, &v2);
    let c20 = _v3d_dot(&v2, &v0);
    let s12 = (1.0 - c12 * c12).sqrt();

    let h = 1.0 - k[0];
    let angle = (k[2] / h) * SNYDER_SUBFACE_ANGLE;
    let (sin_a, versin_a) = (angle.sin(), 1.0 - angle.cos());

    // Position of d along the arc v1 -> v2.
    let f = sin_a * self.volume + versin_a * (c01 * c12 - c20);
    let g = versin_a * s12 * (1.0 + c01);
    let q = 2.0 * g.atan2(f) / _clamped_acos(c12);
    let d = _v3d_slerp(&v1, &v2, q);

    let c0d = _v3d_dot(&v0, &d);
    let t = _clamped_acos(1.0 + h * h * (c0d - 1.0)) / _clamped_acos(c0d);
    Ok(_v3d_slerp(&v0, &d, t))
  }
}
