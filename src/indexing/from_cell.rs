// src/indexing/from_cell.rs

//! Cell to geometry: centers and polygons.

use crate::cell::Cell;
use crate::constants::NUM_HEX_VERTS;
use crate::coords::abc::_abc_to_face_point;
use crate::coords::face_abc::_rectify;
use crate::latlng::vec3d_to_lat_lng;
use crate::projection::{FaceProjection, Projection};
use crate::resolution::compute_height_for_n;
use crate::types::{CellBoundary, CellPolygon, GeoJsonPolygon, GridError, LatLng, PolygonFormat, Vec3d};

/// Position of each generated corner in the cell's winding order. Corners
/// are generated as `+v0, -v0, +v1, -v1, +v2, -v2`.
const WINDING: [usize; NUM_HEX_VERTS] = [0, 3, 4, 1, 2, 5];

/// Unit vector of a cell's center.
pub fn cell_to_vec3d(cell: Cell, projection: &FaceProjection) -> Result<Vec3d, GridError> {
  projection.inv_project(&cell.center_face_point(), cell.face())
}

/// Latitude/longitude in radians of a cell's center.
pub fn cell_to_lat_lng(cell: Cell, projection: &FaceProjection) -> Result<LatLng, GridError> {
  vec3d_to_lat_lng(&cell_to_vec3d(cell, projection)?)
}

/// Polygon inflation factor that widens every cell by `overlap_km` overall.
pub fn inflation_for_overlap(n: i64, overlap_km: f64) -> Result<f64, GridError> {
  if !overlap_km.is_finite() || overlap_km < 0.0 {
    return Err(GridError::InvalidDistance);
  }
  if overlap_km == 0.0 {
    return Ok(1.0);
  }
  Ok(1.0 + 0.5 * overlap_km / compute_height_for_n(n)?)
}

/// The six corners of a cell as unit vectors, in winding order.
///
/// `inflation` scales the corners away from the center; `1.0` gives the
/// exact cell. Corners spilling over a face edge are carried onto the
/// neighbor face before being projected back to the sphere. A cell centered
/// on an icosahedron vertex repeats its last corner.
pub fn cell_corners(
  cell: Cell,
  projection: &FaceProjection,
  inflation: f64,
) -> Result<[Vec3d; NUM_HEX_VERTS], GridError> {
  if !inflation.is_finite() || inflation <= 0.0 {
    return Err(GridError::InvalidArgument);
  }
  let m = cell.face_size() as f64;
  let center = cell.coord().to_array().map(|v| v as f64);

  let mut corners = [Vec3d::default(); NUM_HEX_VERTS];
  for axis in 0..3 {
    // (3 e_axis - 1) / 3, scaled.
    let step: [f64; 3] = std::array::from_fn(|j| inflation * if j == axis { 2.0 / 3.0 } else { -1.0 / 3.0 });
    for (slot, sign) in [1.0, -1.0].into_iter().enumerate() {
      let pos: [f64; 3] = std::array::from_fn(|j| center[j] + sign * step[j]);
      let (face, pos) = _rectify(cell.face(), pos, m)?;
      let p = _abc_to_face_point(&pos, m);
      corners[WINDING[2 * axis + slot]] = projection.inv_project(&p, face)?;
    }
  }
  Ok(corners)
}

/// Spherical boundary of a cell.
pub fn cell_to_boundary(cell: Cell, projection: &FaceProjection, inflation: f64) -> Result<CellBoundary, GridError> {
  let corners = cell_corners(cell, projection, inflation)?;
  let mut boundary = CellBoundary::default();
  for (vert, corner) in boundary.verts.iter_mut().zip(&corners) {
    *vert = vec3d_to_lat_lng(corner)?;
  }
  Ok(boundary)
}

/// Boundary ring in radians, closed by repeating its first corner.
fn _closed_ring(cell: Cell, projection: &FaceProjection, inflation: f64) -> Result<Vec<LatLng>, GridError> {
  let boundary = cell_to_boundary(cell, projection, inflation)?;
  let mut ring: Vec<LatLng> = Vec::with_capacity(NUM_HEX_VERTS + 1);
  ring.extend_from_slice(&boundary.verts);
  ring.push(boundary.verts[0]);
  Ok(ring)
}

/// Closed ring of `[lng, lat]` in degrees.
fn _closed_degree_ring(cell: Cell, projection: &FaceProjection, inflation: f64) -> Result<Vec<[f64; 2]>, GridError> {
  Ok(_closed_ring(cell, projection, inflation)?.iter().map(LatLng::to_lng_lat_degrees).collect())
}

/// Cell polygon in the requested shape. Ring formats repeat the first corner
/// at the end.
pub fn cell_to_polygon(
  cell: Cell,
  format: PolygonFormat,
  projection: &FaceProjection,
  inflation: f64,
) -> Result<CellPolygon, GridError> {
  let polygon = match format {
    PolygonFormat::Xyz => CellPolygon::Xyz(cell_corners(cell, projection, inflation)?.to_vec()),
    PolygonFormat::LatLng => CellPolygon::LatLng(_closed_ring(cell, projection, inflation)?),
    PolygonFormat::LngLat => CellPolygon::LngLat(_closed_degree_ring(cell, projection, inflation)?),
    PolygonFormat::GeoJson => {
      CellPolygon::GeoJson(GeoJsonPolygon::from_ring(_closed_degree_ring(cell, projection, inflation)?))
    }
  };
  Ok(polygon)
}

/// Like [`cell_to_polygon`], widened by an overlap in km instead of an
/// inflation factor.
pub fn cell_to_polygon_with_overlap(
  cell: Cell,
  format: PolygonFormat,
  projection: &FaceProjection,
  overlap_km: f64,
) -> Result<CellPolygon, GridError> {
  let inflation = inflation_for_overlap(cell.resolution(), overlap_km)?;
  cell_to_polygon(cell, format, projection, inflation)
}
