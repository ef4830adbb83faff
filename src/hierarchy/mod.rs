// src/hierarchy/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod parent_child;

pub use parent_child::{cell_to_center_child, cell_to_children, cell_to_parents, Parents, APERTURE};
