// src/projection/gnomonic.rs

use super::{_check_face_point, _check_unit_point, _lift_to_face_plane, _to_face_basis, Projection};
use crate::constants::{EPSILON, FACE_TO_CENTER};
use crate::icosahedron::icosahedron;
use crate::math::vec3d::{_v3d_dot, _v3d_normalize};
use crate::types::{GridError, Vec2d, Vec3d};

/// Central projection from the sphere center onto the face plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gnomonic;

impl Projection for Gnomonic {
  fn project(&self, point: &Vec3d, face: usize) -> Result<Vec2d, GridError> {
    let geom = icosahedron().face(face)?;
    _check_unit_point(point)?;

    let height = _v3d_dot(&geom.normal, point);
    if height <= EPSILON {
      return Err(GridError::DegenerateProjection);
    }
    Ok(_to_face_basis(geom, point) * (FACE_TO_CENTER / height))
  }

  fn inv_project(&self, p: &Vec2d, face: usize) -> Result<Vec3d, GridError> {
    let geom = icosahedron().face(face)?;
    _check_face_point(p)?;
    Ok(_v3d_normalize(&_lift_to_face_plane(geom, p)))
  }
}
