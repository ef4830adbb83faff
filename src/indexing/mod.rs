// src/indexing/mod.rs

pub mod from_cell;
pub mod to_cell;

// Re-export public functions from submodules for easier access
pub use from_cell::{
  cell_corners, cell_to_boundary, cell_to_lat_lng, cell_to_polygon, cell_to_polygon_with_overlap, cell_to_vec3d,
  inflation_for_overlap,
};
pub use to_cell::{lat_lng_to_cell, overlap_margin, vec3d_to_cells, Location};
