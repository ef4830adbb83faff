// src/cell/mod.rs

//! Cell identity: a face and an in-range triangular coordinate triple.

pub mod string_conv;

use crate::constants::NUM_ICOSA_FACES;
use crate::coords::abc::_abc_to_face_point;
use crate::coords::face_abc::{_rectify, _resolve_seams};
use crate::resolution::{_check_resolution, compute_height_for_n, compute_radius_for_n, compute_side_for_n};
use crate::types::{CoordABC, GridError, Vec2d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A grid cell.
///
/// The resolution is implied by the coordinates: `a + b + c = 2 (n + 1)`.
/// Cells built through [`Cell::canonical`] (and every cell returned by grid
/// queries) use the single owner representation of cells lying on face seams,
/// so two canonical cells are equal exactly when they are the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Cell {
  face: u8,
  coord: CoordABC,
}

impl Cell {
  /// Creates a cell from a face and a coordinate triple, as given.
  ///
  /// Fails with `InvalidFace` for a face outside `0..20`, `InvalidResolution`
  /// if the coordinate sum is not `2 (n + 1)` for a supported `n`, and
  /// `OutOfFaceBounds` if a component lies outside `0..=n+1`.
  pub fn new(face: usize, coord: CoordABC) -> Result<Self, GridError> {
    if face >= NUM_ICOSA_FACES {
      return Err(GridError::InvalidFace);
    }
    let sum = coord.sum();
    if sum <= 0 || sum % 2 != 0 {
      return Err(GridError::InvalidResolution);
    }
    let m = sum / 2;
    _check_resolution(m - 1)?;
    if coord.to_array().iter().any(|&v| !(0..=m).contains(&v)) {
      return Err(GridError::OutOfFaceBounds);
    }
    Ok(Self {
      face: face as u8,
      coord,
    })
  }

  /// Like [`Cell::new`], then moves seam cells to their owner face.
  pub fn canonical(face: usize, coord: CoordABC) -> Result<Self, GridError> {
    Self::new(face, coord)?.to_canonical()
  }

  /// Builds the canonical cell for a triple that may overflow `face`,
  /// following face edges until it fits.
  pub(crate) fn rectified(face: usize, coord: CoordABC) -> Result<Self, GridError> {
    if face >= NUM_ICOSA_FACES {
      return Err(GridError::InvalidFace);
    }
    let sum = coord.sum();
    if sum <= 0 || sum % 2 != 0 {
      return Err(GridError::InvalidResolution);
    }
    let m = sum / 2;
    let (face, pos) = _rectify(face, coord.to_array(), m)?;
    Self::canonical(face, CoordABC::from_array(pos))
  }

  /// The owner representation of this cell.
  pub fn to_canonical(self) -> Result<Self, GridError> {
    let (face, pos) = _resolve_seams(self.face(), self.coord.to_array(), self.face_size());
    Self::new(face, CoordABC::from_array(pos))
  }

  /// Whether this is the owner representation of the cell.
  #[must_use]
  pub fn is_canonical(&self) -> bool {
    _resolve_seams(self.face(), self.coord.to_array(), self.face_size()) == (self.face(), self.coord.to_array())
  }

  /// Icosahedron face, `0..20`.
  #[inline]
  #[must_use]
  pub fn face(&self) -> usize {
    usize::from(self.face)
  }

  /// Triangular coordinates on the face.
  #[inline]
  #[must_use]
  pub fn coord(&self) -> CoordABC {
    self.coord
  }

  /// Grid resolution `n`.
  #[inline]
  #[must_use]
  pub fn resolution(&self) -> i64 {
    self.face_size() - 1
  }

  /// `n + 1`, the number of steps along a face edge.
  #[inline]
  #[must_use]
  pub fn face_size(&self) -> i64 {
    self.coord.sum() / 2
  }

  /// Whether the cell is centered on an icosahedron vertex. Such cells are
  /// pentagons.
  #[must_use]
  pub fn is_pentagon(&self) -> bool {
    self.coord.to_array().contains(&0)
  }

  /// Whether the cell is centered on an icosahedron edge.
  #[must_use]
  pub fn is_on_edge(&self) -> bool {
    !self.is_pentagon() && self.coord.to_array().contains(&self.face_size())
  }

  /// Center of the cell in the face-local plane.
  #[must_use]
  pub fn center_face_point(&self) -> Vec2d {
    let pos = self.coord.to_array().map(|v| v as f64);
    _abc_to_face_point(&pos, self.face_size() as f64)
  }

  /// Nominal radius in km of cells at this cell's resolution.
  pub fn compute_radius(&self) -> Result<f64, GridError> {
    compute_radius_for_n(self.resolution())
  }

  /// Nominal center-to-edge distance in km at this cell's resolution.
  pub fn compute_height(&self) -> Result<f64, GridError> {
    compute_height_for_n(self.resolution())
  }

  /// Nominal side length in km at this cell's resolution.
  pub fn compute_side(&self) -> Result<f64, GridError> {
    compute_side_for_n(self.resolution())
  }
}
