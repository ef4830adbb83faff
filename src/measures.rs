// src/measures.rs

//! Measured (as opposed to nominal) cell sizes, computed from the actual cell
//! polygon under a given projection.

use crate::cell::Cell;
use crate::constants::{EARTH_RADIUS_KM, M_PI, M_SQRT3, NUM_HEX_VERTS};
use crate::indexing::{cell_corners, cell_to_vec3d};
use crate::latlng::_vec3d_distance_km;
use crate::math::vec3d::{_v3d_det, _v3d_dot};
use crate::projection::FaceProjection;
use crate::types::{GridError, Vec3d};

/// Area in steradians of a spherical polygon given by its unit corners.
///
/// The polygon is split into a fan of triangles around the first corner; each
/// triangle's excess is `2 atan2(det(a, b, c), 1 + a.b + b.c + c.a)`.
fn _polygon_area_rads2(verts: &[Vec3d]) -> f64 {
  let Some((anchor, rest)) = verts.split_first() else {
    return 0.0;
  };
  let total: f64 = rest
    .windows(2)
    .map(|w| {
      let (b, c) = (&w[0], &w[1]);
      let s = 1.0 + _v3d_dot(anchor, b) + _v3d_dot(b, c) + _v3d_dot(c, anchor);
      _v3d_det(anchor, b, c).atan2(s)
    })
    .sum();
  (total * 2.0).abs()
}

/// Area of a cell in steradians.
pub fn cell_area_rads2(cell: Cell, projection: &FaceProjection) -> Result<f64, GridError> {
  Ok(_polygon_area_rads2(&cell_corners(cell, projection, 1.0)?))
}

/// Area of a cell in square kilometers.
pub fn cell_area_km2(cell: Cell, projection: &FaceProjection) -> Result<f64, GridError> {
  Ok(cell_area_rads2(cell, projection)? * EARTH_RADIUS_KM * EARTH_RADIUS_KM)
}

/// Radius in km of the disk with the same area as the cell, estimated from
/// the mean great circle distance between its center and its corners.
pub fn effective_radius_km(cell: Cell, projection: &FaceProjection) -> Result<f64, GridError> {
  let center = cell_to_vec3d(cell, projection)?;
  let corners = cell_corners(cell, projection, 1.0)?;
  let mean = corners.iter().map(|c| _vec3d_distance_km(&center, c)).sum::<f64>() / NUM_HEX_VERTS as f64;
  // Mean center-to-corner distance of a regular hexagon to its equal-area radius.
  Ok(mean * (3.0 * M_SQRT3 / (2.0 * M_PI)).sqrt())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::M_PI_2;
  use crate::projection::ProjectionKind;
  use crate::resolution::{cell_area_avg_km2, compute_radius_for_n};
  use crate::types::CoordABC;

  fn cell(id: &str) -> Cell {
    id.parse().unwrap()
  }

  #[test]
  fn test_polygon_area_octant() {
    let verts = [
      Vec3d::new(1.0, 0.0, 0.0),
      Vec3d::new(0.0, 0.0, 1.0),
      Vec3d::new(0.0, 1.0, 0.0),
    ];
    assert!((_polygon_area_rads2(&verts) - M_PI_2).abs() < 1e-12);
    assert_eq!(_polygon_area_rads2(&verts[..2]), 0.0);
    assert_eq!(_polygon_area_rads2(&[]), 0.0);
  }

  #[test]
  fn test_cell_area() {
    let snyder = FaceProjection::default();
    let gnomonic = FaceProjection::from(ProjectionKind::Gnomonic);
    let avg = cell_area_avg_km2(35).unwrap();

    let hex = cell_area_km2(cell("A00024-00024-00024"), &snyder).unwrap();
    assert!((hex - 39360.58893039587).abs() < 1e-3, "{hex}");
    assert!((hex - avg).abs() / avg < 1e-3);
    let pentagon = cell_area_km2(cell("A00036-00036-00000"), &snyder).unwrap();
    assert!((pentagon - 30584.089855572798).abs() < 1e-3, "{pentagon}");

    let face_center = cell_area_km2(cell("A00024-00024-00024"), &gnomonic).unwrap();
    assert!((face_center - 47473.28879221197).abs() < 1e-3, "{face_center}");
  }

  #[test]
  fn test_cells_tile_the_sphere() {
    let projection = FaceProjection::default();
    for n in [2_i64, 5] {
      let m = n + 1;
      let mut cells = Vec::new();
      for face in 0..20 {
        for a in 0..=m {
          for b in 0..=m {
            let c = 2 * m - a - b;
            if (0..=m).contains(&c) {
              let cell = Cell::canonical(face, CoordABC::new(a, b, c)).unwrap();
              if !cells.contains(&cell) {
                cells.push(cell);
              }
            }
          }
        }
      }
      let total: f64 = cells.iter().map(|&c| cell_area_rads2(c, &projection).unwrap()).sum();
      assert!((total - 4.0 * M_PI).abs() < 1e-9, "n = {n}: {total}");
    }
  }

  #[test]
  fn test_effective_radius() {
    let projection = FaceProjection::default();
    let r = effective_radius_km(cell("E00036-00018-00018"), &projection).unwrap();
    assert!((r - 112.208).abs() < 0.01, "{r}");
    let nominal = compute_radius_for_n(35).unwrap();
    assert!((r - nominal).abs() / nominal < 0.02);
  }
}
