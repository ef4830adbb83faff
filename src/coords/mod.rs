// src/coords/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod abc;
pub mod face_abc;
