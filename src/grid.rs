// src/grid.rs

//! The query surface: a validated configuration bound to its projection.

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::indexing::{self, inflation_for_overlap, overlap_margin, Location};
use crate::latlng::lat_lng_to_vec3d;
use crate::measures;
use crate::projection::{FaceProjection, ProjectionKind};
use crate::types::{CellBoundary, CellPolygon, GridError, LatLng, PolygonFormat, Vec3d};

/// A hexagonal grid of fixed resolution over the sphere.
///
/// Cheap to copy; queries take `&self` and never allocate beyond their
/// results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGrid {
  config: GridConfig,
  projection: FaceProjection,
  /// Face-plane margin derived from the overlap.
  margin: f64,
  /// Polygon inflation derived from the overlap.
  inflation: f64,
}

impl HexGrid {
  /// Validates `config` and builds the grid.
  pub fn new(config: GridConfig) -> Result<Self, GridError> {
    config.validate()?;
    let grid = Self {
      config,
      projection: config.projection.into(),
      margin: overlap_margin(config.overlap_km)?,
      inflation: inflation_for_overlap(config.resolution, config.overlap_km)?,
    };
    log::debug!(
      "hex grid: n = {}, overlap = {} km, {:?} (margin {:.3e})",
      config.resolution,
      config.overlap_km,
      config.projection,
      grid.margin
    );
    Ok(grid)
  }

  /// Grid of resolution `n` with the default projection and no overlap.
  pub fn with_resolution(n: i64) -> Result<Self, GridError> {
    Self::new(GridConfig::new(n))
  }

  /// The configuration the grid was built from.
  #[must_use]
  pub fn config(&self) -> &GridConfig {
    &self.config
  }

  /// Grid resolution `n`.
  #[must_use]
  pub fn resolution(&self) -> i64 {
    self.config.resolution
  }

  /// Projection in use.
  #[must_use]
  pub fn projection(&self) -> ProjectionKind {
    self.projection.kind()
  }

  /// Overlap in km.
  #[must_use]
  pub fn overlap_km(&self) -> f64 {
    self.config.overlap_km
  }

  /// Changes the overlap, recomputing the lookup margin and polygon
  /// inflation. On error the grid is left unchanged.
  pub fn set_overlap(&mut self, overlap_km: f64) -> Result<(), GridError> {
    let config = self.config.with_overlap_km(overlap_km);
    *self = Self::new(config)?;
    Ok(())
  }

  /// Resolves `point` to its face and face-plane position.
  pub fn locate(&self, point: &Vec3d) -> Result<Location, GridError> {
    Location::new(point, &self.projection)
  }

  /// Cells holding a unit vector, widened by the overlap: the cell holding
  /// the point first, then the cells within half the overlap of it.
  pub fn vec3d_to_cells(&self, point: &Vec3d) -> Result<Vec<Cell>, GridError> {
    self.locate(point)?.find_cells(self.config.resolution, self.margin)
  }

  /// The cell holding a unit vector, ignoring the overlap.
  pub fn vec3d_to_cell(&self, point: &Vec3d) -> Result<Cell, GridError> {
    self.locate(point)?.find_cell(self.config.resolution)
  }

  /// Like [`HexGrid::vec3d_to_cells`], from a latitude/longitude in radians.
  pub fn lat_lng_to_cells(&self, geo: &LatLng) -> Result<Vec<Cell>, GridError> {
    self.vec3d_to_cells(&lat_lng_to_vec3d(geo)?)
  }

  /// Like [`HexGrid::vec3d_to_cell`], from a latitude/longitude in radians.
  pub fn lat_lng_to_cell(&self, geo: &LatLng) -> Result<Cell, GridError> {
    self.vec3d_to_cell(&lat_lng_to_vec3d(geo)?)
  }

  /// Unit vector of a cell's center.
  pub fn cell_to_vec3d(&self, cell: Cell) -> Result<Vec3d, GridError> {
    self.check_cell(cell)?;
    indexing::cell_to_vec3d(cell, &self.projection)
  }

  /// Latitude/longitude in radians of a cell's center.
  pub fn cell_to_lat_lng(&self, cell: Cell) -> Result<LatLng, GridError> {
    self.check_cell(cell)?;
    indexing::cell_to_lat_lng(cell, &self.projection)
  }

  /// Corners of a cell, widened by the overlap.
  pub fn cell_to_boundary(&self, cell: Cell) -> Result<CellBoundary, GridError> {
    self.check_cell(cell)?;
    indexing::cell_to_boundary(cell, &self.projection, self.inflation)
  }

  /// Polygon of a cell in the requested shape, widened by the overlap.
  pub fn cell_to_polygon(&self, cell: Cell, format: PolygonFormat) -> Result<CellPolygon, GridError> {
    self.check_cell(cell)?;
    indexing::cell_to_polygon(cell, format, &self.projection, self.inflation)
  }

  /// Polygon of a cell widened by `overlap_km` instead of the grid's own
  /// overlap.
  pub fn cell_to_polygon_with_overlap(
    &self,
    cell: Cell,
    format: PolygonFormat,
    overlap_km: f64,
  ) -> Result<CellPolygon, GridError> {
    self.check_cell(cell)?;
    indexing::cell_to_polygon_with_overlap(cell, format, &self.projection, overlap_km)
  }

  /// Equal-area radius in km of a cell, from its exact (not widened) polygon.
  pub fn effective_radius_km(&self, cell: Cell) -> Result<f64, GridError> {
    self.check_cell(cell)?;
    measures::effective_radius_km(cell, &self.projection)
  }

  /// Area in km² of a cell's exact polygon.
  pub fn cell_area_km2(&self, cell: Cell) -> Result<f64, GridError> {
    self.check_cell(cell)?;
    measures::cell_area_km2(cell, &self.projection)
  }

  /// Cells must belong to this grid's resolution.
  fn check_cell(&self, cell: Cell) -> Result<(), GridError> {
    if cell.resolution() == self.config.resolution {
      Ok(())
    } else {
      Err(GridError::InvalidResolution)
    }
  }
}

impl Default for HexGrid {
  fn default() -> Self {
    let config = GridConfig::default();
    Self {
      config,
      projection: config.projection.into(),
      margin: 0.0,
      inflation: 1.0,
    }
  }
}
