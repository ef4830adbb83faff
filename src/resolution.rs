// src/resolution.rs

//! Conversions between the grid resolution `n` and nominal cell sizes.
//!
//! A grid of resolution `n` splits every icosahedron edge into `n + 1` steps.
//! Sizes are derived from the average cell area `4 pi R^2 / (10 (n + 1)^2)`
//! treated as a regular hexagon (height, side) or a disk (radius).

use crate::constants::{EARTH_RADIUS_KM, MAX_RESOLUTION, M_PI, M_SQRT3};
use crate::types::GridError;

#[inline]
fn _sphere_area_km2() -> f64 {
  4.0 * M_PI * (EARTH_RADIUS_KM * EARTH_RADIUS_KM)
}

/// Fails with `InvalidResolution` for `n` outside `0..=MAX_RESOLUTION`.
#[inline]
pub(crate) fn _check_resolution(n: i64) -> Result<(), GridError> {
  if (0..=MAX_RESOLUTION).contains(&n) {
    Ok(())
  } else {
    Err(GridError::InvalidResolution)
  }
}

/// Nominal number of cells, `10 (n + 1)^2`, used for area-based sizes.
#[inline]
fn _nominal_cell_count(n: i64) -> f64 {
  let m = (n + 1) as f64;
  10.0 * m * m
}

/// Resolution whose nominal cell area is closest to `area_km2`.
///
/// The half-way case rounds to even.
fn _n_for_area(area_km2: f64) -> Result<i64, GridError> {
  let count = _sphere_area_km2() / area_km2;
  let n = ((count / 10.0).sqrt() - 1.0).round_ties_even();
  if !n.is_finite() || n < 0.0 || n > MAX_RESOLUTION as f64 {
    return Err(GridError::InvalidResolution);
  }
  Ok(n as i64)
}

#[inline]
fn _check_distance(km: f64) -> Result<(), GridError> {
  if km.is_finite() && km > 0.0 {
    Ok(())
  } else {
    Err(GridError::InvalidDistance)
  }
}

/// Exact number of distinct cells in a grid of resolution `n`.
///
/// Every cell is a hexagon except the 12 centered on the icosahedron
/// vertices, which are pentagons.
pub fn num_cells(n: i64) -> Result<i64, GridError> {
  _check_resolution(n)?;
  let m = n + 1;
  Ok(10 * m * m + 2)
}

/// Average cell area in km^2 at resolution `n`.
pub fn cell_area_avg_km2(n: i64) -> Result<f64, GridError> {
  _check_resolution(n)?;
  Ok(_sphere_area_km2() / _nominal_cell_count(n))
}

/// Radius in km of the disk with the average cell area at resolution `n`.
pub fn compute_radius_for_n(n: i64) -> Result<f64, GridError> {
  Ok((cell_area_avg_km2(n)? / M_PI).sqrt())
}

/// Center-to-edge distance in km of the regular hexagon with the average
/// cell area at resolution `n`.
pub fn compute_height_for_n(n: i64) -> Result<f64, GridError> {
  Ok((cell_area_avg_km2(n)? * M_SQRT3 / 6.0).sqrt())
}

/// Side length in km of the regular hexagon with the average cell area at
/// resolution `n`.
pub fn compute_side_for_n(n: i64) -> Result<f64, GridError> {
  Ok((2.0 * cell_area_avg_km2(n)? * M_SQRT3 / 9.0).sqrt())
}

/// Resolution whose cells have, on average, the area of a disk of radius
/// `r` km.
pub fn compute_n_for_radius(r: f64) -> Result<i64, GridError> {
  _check_distance(r)?;
  _n_for_area(M_PI * (r * r))
}

/// Resolution whose cells have, on average, a center-to-edge distance of
/// `h` km.
pub fn compute_n_for_height(h: f64) -> Result<i64, GridError> {
  _check_distance(h)?;
  _n_for_area(2.0 * (h * h) * M_SQRT3)
}

/// Resolution whose cells have, on average, sides of `s` km.
pub fn compute_n_for_side(s: f64) -> Result<i64, GridError> {
  _check_distance(s)?;
  _n_for_area(3.0 * (s * s) * M_SQRT3 / 2.0)
}
