// src/traversal/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod grid_disk;
pub mod neighbors;

pub use grid_disk::{k_ring, max_k_ring_size};
pub use neighbors::{are_neighbor_cells, max_step_radius, UNIT_OFFSETS};
