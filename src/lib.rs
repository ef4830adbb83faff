#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Every fallible function returns GridError
#![allow(clippy::cast_possible_truncation)] // Grid coordinates stay far below the f64 mantissa
#![allow(clippy::cast_precision_loss)] // Same
#![allow(clippy::cast_sign_loss)] // Face indices and sizes are checked non-negative
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended
#![allow(clippy::unreadable_literal)] // Geometric constants read better in full
#![allow(clippy::similar_names)] // Can be common in math-heavy code
#![allow(clippy::wildcard_imports)] // Allow for re-exporting from modules

//! `xs-hexgrid` is a discrete global grid: it tiles the sphere with hexagonal
//! cells laid out on the faces of a subdivided icosahedron.
//!
//! Cells are addressed by a face and a triangular coordinate triple and
//! printed as 18-character identifiers such as `E00036-00018-00018`. Points
//! are mapped to faces with either a gnomonic or Snyder's equal-area
//! projection.
//!
//! ```
//! use xs_hexgrid::{GridConfig, HexGrid, LatLng};
//!
//! let grid = HexGrid::new(GridConfig::default()).unwrap();
//! let cell = grid.lat_lng_to_cell(&LatLng::from_degrees(0.0, 0.0)).unwrap();
//! assert_eq!(cell.to_string(), "E00036-00018-00018");
//! assert_eq!(cell.neighbors().unwrap().len(), 6);
//! ```

// Declare modules
pub mod cell;
pub mod config;
pub mod constants;
pub mod coords;
pub mod grid;
pub mod hierarchy;
pub mod icosahedron;
pub mod indexing;
pub mod latlng;
pub mod math;
pub mod measures;
pub mod projection;
pub mod resolution;
pub mod traversal;
pub mod types;

// Re-export key public types and functions for easier use
pub use cell::string_conv::{cell_to_string, string_to_cell};
pub use cell::Cell;
pub use config::GridConfig;
pub use constants::{EARTH_RADIUS_KM, MAX_RESOLUTION};
pub use grid::HexGrid;
pub use hierarchy::{cell_to_center_child, cell_to_children, cell_to_parents, Parents};
pub use icosahedron::{icosahedron, FaceClass, Icosahedron};
pub use indexing::{
  cell_to_boundary, cell_to_lat_lng, cell_to_polygon, cell_to_polygon_with_overlap, cell_to_vec3d, lat_lng_to_cell,
  vec3d_to_cells, Location,
};
pub use latlng::{
  degs_to_rads, great_circle_distance_km, great_circle_distance_rads, lat_lng_to_vec3d, rads_to_degs,
  vec3d_to_lat_lng,
};
pub use measures::{cell_area_km2, cell_area_rads2, effective_radius_km};
pub use projection::{FaceProjection, Gnomonic, Projection, ProjectionKind, SnyderEqualArea};
pub use resolution::{
  cell_area_avg_km2, compute_height_for_n, compute_n_for_height, compute_n_for_radius, compute_n_for_side,
  compute_radius_for_n, compute_side_for_n, num_cells,
};
pub use traversal::{are_neighbor_cells, k_ring, max_k_ring_size, max_step_radius, UNIT_OFFSETS};
pub use types::{
  CellBoundary, CellPolygon, CoordABC, CoordOffset, GeoJsonPolygon, GridError, LatLng, PolygonFormat, Vec2d, Vec3d,
};
