// src/traversal/neighbors.rs

use crate::cell::Cell;
use crate::constants::NUM_ICOSA_FACES;
use crate::types::{CoordOffset, GridError};

/// The six unit steps, counter-clockwise starting towards `+a -b`.
pub const UNIT_OFFSETS: [CoordOffset; 6] = [
  CoordOffset::new(1, -1, 0),
  CoordOffset::new(1, 0, -1),
  CoordOffset::new(0, 1, -1),
  CoordOffset::new(-1, 1, 0),
  CoordOffset::new(-1, 0, 1),
  CoordOffset::new(0, -1, 1),
];

impl Cell {
  /// Cell reached by adding `offset` to this cell's coordinates.
  ///
  /// The target may lie on another face: it is carried across face edges and
  /// returned in canonical form. Offsets must sum to zero; offsets longer
  /// than [`max_step_radius`] fail with `OutOfFaceBounds`.
  pub fn neighbor(&self, offset: CoordOffset) -> Result<Cell, GridError> {
    if !offset.is_balanced() {
      return Err(GridError::InvalidOffset);
    }
    if offset.step_radius() > max_step_radius(self.face_size()) {
      return Err(GridError::OutOfFaceBounds);
    }
    Cell::rectified(self.face(), self.coord().offset(offset)?)
  }

  /// The distinct cells sharing an edge with this one: six for hexagons,
  /// five for pentagons.
  pub fn neighbors(&self) -> Result<Vec<Cell>, GridError> {
    let origin = self.to_canonical()?;
    let mut out: Vec<Cell> = Vec::with_capacity(UNIT_OFFSETS.len());
    for offset in UNIT_OFFSETS {
      let cell = self.neighbor(offset)?;
      if cell != origin && !out.contains(&cell) {
        out.push(cell);
      }
    }
    Ok(out)
  }
}

/// Longest offset the face walk can carry on faces of size `m`: one face
/// crossing per face, each at most two face sizes long.
#[must_use]
pub fn max_step_radius(m: i64) -> i64 {
  2 * (NUM_ICOSA_FACES as i64 + 1) * m
}

/// Returns whether or not the provided cells are neighbors.
///
/// Both cells must share a resolution. Equal cells are not neighbors.
pub fn are_neighbor_cells(origin: Cell, destination: Cell) -> Result<bool, GridError> {
  if origin.resolution() != destination.resolution() {
    return Err(GridError::InvalidResolution);
  }
  let destination = destination.to_canonical()?;
  Ok(origin.neighbors()?.contains(&destination))
}
