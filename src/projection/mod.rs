// src/projection/mod.rs

//! Sphere-to-face projections.
//!
//! A projection maps a unit vector onto the plane of one icosahedron face,
//! expressed in that face's `(e1, e2)` basis. Both implementations share the
//! same face triangle: edge length 2, centered on the origin of the plane, so
//! the grid addressing does not depend on the projection in use.

pub mod gnomonic;
pub mod snyder;

pub use gnomonic::Gnomonic;
pub use snyder::SnyderEqualArea;

use crate::constants::{FACE_TO_CENTER, UNIT_NORM_EPSILON};
use crate::icosahedron::FaceGeometry;
use crate::math::vec3d::{_v3d_dot, _v3d_mag};
use crate::types::{GridError, Vec2d, Vec3d};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A bijection between the part of the sphere around a face and the plane
/// of that face.
pub trait Projection {
  /// Projects the unit vector `point` onto the plane of `face`.
  fn project(&self, point: &Vec3d, face: usize) -> Result<Vec2d, GridError>;

  /// Maps a face-local point of `face` back onto the unit sphere.
  fn inv_project(&self, p: &Vec2d, face: usize) -> Result<Vec3d, GridError>;
}

/// Selects the projection a grid is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum ProjectionKind {
  /// Central projection. Preserves great circles, distorts area.
  Gnomonic = 0,
  /// Snyder's equal-area polyhedral projection.
  #[default]
  SnyderEqualArea = 1,
}

impl TryFrom<u8> for ProjectionKind {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(ProjectionKind::Gnomonic),
      1 => Ok(ProjectionKind::SnyderEqualArea),
      _ => Err(GridError::InvalidArgument),
    }
  }
}

/// Closed set of the projections a grid can use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceProjection {
  /// See [`Gnomonic`].
  Gnomonic(Gnomonic),
  /// See [`SnyderEqualArea`].
  SnyderEqualArea(SnyderEqualArea),
}

impl FaceProjection {
  /// The configuration value this projection was built from.
  #[must_use]
  pub fn kind(&self) -> ProjectionKind {
    match self {
      FaceProjection::Gnomonic(_) => ProjectionKind::Gnomonic,
      FaceProjection::SnyderEqualArea(_) => ProjectionKind::SnyderEqualArea,
    }
  }
}

impl From<ProjectionKind> for FaceProjection {
  fn from(kind: ProjectionKind) -> Self {
    match kind {
      ProjectionKind::Gnomonic => FaceProjection::Gnomonic(Gnomonic),
      ProjectionKind::SnyderEqualArea => FaceProjection::SnyderEqualArea(SnyderEqualArea::new()),
    }
  }
}

impl Default for FaceProjection {
  fn default() -> Self {
    ProjectionKind::default().into()
  }
}

impl Projection for FaceProjection {
  #[inline]
  fn project(&self, point: &Vec3d, face: usize) -> Result<Vec2d, GridError> {
    match self {
      FaceProjection::Gnomonic(p) => p.project(point, face),
      FaceProjection::SnyderEqualArea(p) => p.project(point, face),
    }
  }

  #[inline]
  fn inv_project(&self, p: &Vec2d, face: usize) -> Result<Vec3d, GridError> {
    match self {
      FaceProjection::Gnomonic(g) => g.inv_project(p, face),
      FaceProjection::SnyderEqualArea(s) => s.inv_project(p, face),
    }
  }
}

/// Rejects points that are not finite unit vectors.
#[inline]
pub(crate) fn _check_unit_point(point: &Vec3d) -> Result<(), GridError> {
  let mag = _v3d_mag(point);
  if !mag.is_finite() || (mag - 1.0).abs() > UNIT_NORM_EPSILON {
    return Err(GridError::InvalidPoint);
  }
  Ok(())
}

/// Rejects face-local points with a non-finite component.
#[inline]
pub(crate) fn _check_face_point(p: &Vec2d) -> Result<(), GridError> {
  if p.x.is_finite() && p.y.is_finite() {
    Ok(())
  } else {
    Err(GridError::InvalidPoint)
  }
}

/// Components of a 3D vector in the face basis `(e1, e2)`.
#[inline]
pub(crate) fn _to_face_basis(geom: &FaceGeometry, v: &Vec3d) -> Vec2d {
  Vec2d::new(_v3d_dot(&geom.e1, v), _v3d_dot(&geom.e2, v))
}

/// 3D position of a face-local point on the scaled face plane, which sits at
/// distance `FACE_TO_CENTER` from the origin.
#[inline]
pub(crate) fn _lift_to_face_plane(geom: &FaceGeometry, p: &Vec2d) -> Vec3d {
  geom.e1 * p.x + geom.e2 * p.y + geom.normal * FACE_TO_CENTER
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_projection_kind_round_trip() {
    for kind in [ProjectionKind::Gnomonic, ProjectionKind::SnyderEqualArea] {
      assert_eq!(FaceProjection::from(kind).kind(), kind);
      assert_eq!(ProjectionKind::try_from(kind as u8), Ok(kind));
    }
    assert_eq!(ProjectionKind::try_from(2), Err(GridError::InvalidArgument));
    assert_eq!(FaceProjection::default().kind(), ProjectionKind::SnyderEqualArea);
  }

  #[test]
  fn test_check_unit_point() {
    assert!(_check_unit_point(&Vec3d::new(0.0, 1.0, 0.0)).is_ok());
    assert_eq!(_check_unit_point(&Vec3d::new(0.0, 2.0, 0.0)), Err(GridError::InvalidPoint));
    assert_eq!(_check_unit_point(&Vec3d::new(f64::NAN, 0.0, 0.0)), Err(GridError::InvalidPoint));
    assert_eq!(_check_face_point(&Vec2d::new(f64::INFINITY, 0.0)), Err(GridError::InvalidPoint));
  }
}
