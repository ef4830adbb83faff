// src/indexing/to_cell.rs

//! Point to cell resolution.

use crate::cell::Cell;
use crate::constants::{EARTH_RADIUS_KM, M_PI, M_SQRT3};
use crate::coords::abc::{_face_point_to_triangular, _triangular_to_abc, TRIANGULAR_AXES};
use crate::icosahedron::icosahedron;
use crate::latlng::lat_lng_to_vec3d;
use crate::projection::{FaceProjection, Projection};
use crate::resolution::_check_resolution;
use crate::types::{GridError, LatLng, Vec2d, Vec3d};
use smallvec::SmallVec;

/// A unit point together with the face it falls on and its position in that
/// face's plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
  /// Unit vector.
  pub point: Vec3d,
  /// Face whose normal is closest to `point`.
  pub face: usize,
  /// Projection of `point` onto `face`.
  pub face_point: Vec2d,
}

impl Location {
  /// Resolves the face of `point` and projects it.
  pub fn new(point: &Vec3d, projection: &FaceProjection) -> Result<Self, GridError> {
    let face = icosahedron().nearest_face(point);
    let face_point = projection.project(point, face)?;
    Ok(Self {
      point: *point,
      face,
      face_point,
    })
  }

  /// Like [`Location::new`], from a latitude/longitude in radians.
  pub fn from_lat_lng(geo: &LatLng, projection: &FaceProjection) -> Result<Self, GridError> {
    Self::new(&lat_lng_to_vec3d(geo)?, projection)
  }

  /// Cell of resolution `n` holding this location.
  pub fn find_cell(&self, n: i64) -> Result<Cell, GridError> {
    _check_resolution(n)?;
    self.cell_at(&self.face_point, n + 1)
  }

  /// Cells of resolution `n` within `margin` (face-plane units) of this
  /// location, the cell holding the location first.
  ///
  /// Besides the location itself, the six points shifted by `margin` both
  /// ways along each triangular axis are resolved. A shift along axis `i`
  /// moves triangular coordinate `i` by `margin` and the other two by half
  /// that the other way, so every probe stays on the face plane and a margin
  /// just over one cell height reaches all six neighbors. With a zero margin
  /// a single cell is returned.
  pub fn find_cells(&self, n: i64, margin: f64) -> Result<Vec<Cell>, GridError> {
    _check_resolution(n)?;
    if !margin.is_finite() || margin < 0.0 {
      return Err(GridError::InvalidDistance);
    }
    let m = n + 1;

    let mut probes: SmallVec<[Vec2d; 7]> = SmallVec::new();
    probes.push(self.face_point);
    if margin > 0.0 {
      for axis in TRIANGULAR_AXES {
        probes.push(self.face_point + axis * margin);
        probes.push(self.face_point - axis * margin);
      }
    }

    let mut out: Vec<Cell> = Vec::with_capacity(probes.len());
    for probe in &probes {
      let cell = self.cell_at(probe, m)?;
      if !out.contains(&cell) {
        out.push(cell);
      }
    }
    Ok(out)
  }

  fn cell_at(&self, p: &Vec2d, m: i64) -> Result<Cell, GridError> {
    let coord = _triangular_to_abc(&_face_point_to_triangular(p), m);
    Cell::rectified(self.face, coord)
  }
}

/// Face-plane margin matching an overlap distance in km.
///
/// The face triangle of edge 2 stands for a twentieth of the sphere, so one
/// km spans `sqrt(5 sqrt(3) / (pi R^2))` plane units on average. Half the
/// overlap is added on each side of a cell.
pub fn overlap_margin(overlap_km: f64) -> Result<f64, GridError> {
  if !overlap_km.is_finite() || overlap_km < 0.0 {
    return Err(GridError::InvalidDistance);
  }
  Ok(0.5 * overlap_km * (5.0 * M_SQRT3 / (M_PI * EARTH_RADIUS_KM * EARTH_RADIUS_KM)).sqrt())
}

/// Cells of resolution `n` within `margin` of a unit vector.
pub fn vec3d_to_cells(
  point: &Vec3d,
  n: i64,
  margin: f64,
  projection: &FaceProjection,
) -> Result<Vec<Cell>, GridError> {
  Location::new(point, projection)?.find_cells(n, margin)
}

/// Cell of resolution `n` holding a latitude/longitude in radians.
pub fn lat_lng_to_cell(geo: &LatLng, n: i64, projection: &FaceProjection) -> Result<Cell, GridError> {
  Location::from_lat_lng(geo, projection)?.find_cell(n)
}
