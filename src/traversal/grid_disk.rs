// src/traversal/grid_disk.rs

use crate::cell::Cell;
use crate::coords::abc::_offsets_at_radius;
use crate::resolution::num_cells;
use crate::traversal::neighbors::max_step_radius;
use crate::types::GridError;

/// Maximum number of cells in a k-ring disk, `3k(k+1) + 1`.
///
/// Disks touching an icosahedron vertex hold fewer cells.
pub fn max_k_ring_size(k: i64) -> Result<i64, GridError> {
  if k < 0 {
    return Err(GridError::InvalidArgument);
  }
  3_i64
    .checked_mul(k)
    .and_then(|v| v.checked_mul(k + 1))
    .and_then(|v| v.checked_add(1))
    .ok_or(GridError::InvalidArgument)
}

/// Cells within `k` steps of `origin`, the canonical origin first, then by
/// increasing step count.
///
/// Each cell appears once. Near icosahedron vertices, where several offsets
/// reach the same cell, the disk holds fewer than `max_k_ring_size(k)` cells.
/// `k` beyond [`max_step_radius`] fails with `OutOfFaceBounds`.
pub fn k_ring(origin: Cell, k: i64) -> Result<Vec<Cell>, GridError> {
  let bound = max_k_ring_size(k)?;
  if k > max_step_radius(origin.face_size()) {
    return Err(GridError::OutOfFaceBounds);
  }
  let capacity = usize::try_from(bound.min(num_cells(origin.resolution())?)).map_err(|_| GridError::InvalidArgument)?;
  let mut out: Vec<Cell> = Vec::new();
  out.try_reserve(capacity).map_err(|_| GridError::InvalidArgument)?;
  for radius in 0..=k {
    for offset in _offsets_at_radius(radius) {
      let cell = origin.neighbor(offset)?;
      if !out.contains(&cell) {
        out.push(cell);
      }
    }
  }
  log::debug!("k_ring({origin}, {k}) -> {} cells", out.len());
  Ok(out)
}

impl Cell {
  /// See [`k_ring`].
  pub fn k_ring(&self, k: i64) -> Result<Vec<Cell>, GridError> {
    k_ring(*self, k)
  }
}
