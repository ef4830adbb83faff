// src/config.rs

//! Grid configuration.

use crate::projection::ProjectionKind;
use crate::resolution::_check_resolution;
use crate::types::GridError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters a [`crate::HexGrid`] is built from.
///
/// Validated by [`crate::HexGrid::new`]; immutable once the grid exists,
/// except for the overlap (see [`crate::HexGrid::set_overlap`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
  /// Grid resolution `n`: every icosahedron edge is split into `n + 1` steps.
  ///
  /// Default: 35, cells of about 112 km radius.
  pub resolution: i64,

  /// Overlap between neighboring cells in km.
  ///
  /// Point lookups return every cell within half the overlap of the point
  /// and polygons are widened by half the overlap on each side. Default: 0.
  pub overlap_km: f64,

  /// Projection between the sphere and the icosahedron faces.
  pub projection: ProjectionKind,
}

impl GridConfig {
  /// Default resolution.
  pub const DEFAULT_RESOLUTION: i64 = 35;

  /// Configuration for resolution `n`, no overlap, default projection.
  #[must_use]
  pub fn new(resolution: i64) -> Self {
    Self {
      resolution,
      overlap_km: 0.0,
      projection: ProjectionKind::default(),
    }
  }

  /// Sets the resolution.
  #[must_use]
  pub fn with_resolution(mut self, resolution: i64) -> Self {
    self.resolution = resolution;
    self
  }

  /// Sets the overlap in km.
  #[must_use]
  pub fn with_overlap_km(mut self, overlap_km: f64) -> Self {
    self.overlap_km = overlap_km;
    self
  }

  /// Sets the projection.
  #[must_use]
  pub fn with_projection(mut self, projection: ProjectionKind) -> Self {
    self.projection = projection;
    self
  }

  /// Checks the resolution range and that the overlap is finite and not
  /// negative.
  pub fn validate(&self) -> Result<(), GridError> {
    _check_resolution(self.resolution)?;
    if !self.overlap_km.is_finite() || self.overlap_km < 0.0 {
      return Err(GridError::InvalidDistance);
    }
    Ok(())
  }
}

impl Default for GridConfig {
  fn default() -> Self {
    Self::new(Self::DEFAULT_RESOLUTION)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::MAX_RESOLUTION;

  #[test]
  fn test_default() {
    let config = GridConfig::default();
    assert_eq!(config.resolution, 35);
    assert_eq!(config.overlap_km, 0.0);
    assert_eq!(config.projection, ProjectionKind::SnyderEqualArea);
    assert_eq!(config.validate(), Ok(()));
  }

  #[test]
  fn test_builders() {
    let config = GridConfig::default()
      .with_resolution(7)
      .with_overlap_km(12.5)
      .with_projection(ProjectionKind::Gnomonic);
    assert_eq!(config.resolution, 7);
    assert_eq!(config.overlap_km, 12.5);
    assert_eq!(config.projection, ProjectionKind::Gnomonic);
  }

  #[test]
  fn test_validate() {
    assert_eq!(GridConfig::new(-1).validate(), Err(GridError::InvalidResolution));
    assert_eq!(GridConfig::new(MAX_RESOLUTION + 1).validate(), Err(GridError::InvalidResolution));
    assert_eq!(GridConfig::new(MAX_RESOLUTION).validate(), Ok(()));
    assert_eq!(
      GridConfig::default().with_overlap_km(-0.1).validate(),
      Err(GridError::InvalidDistance)
    );
    assert_eq!(
      GridConfig::default().with_overlap_km(f64::INFINITY).validate(),
      Err(GridError::InvalidDistance)
    );
  }
}
