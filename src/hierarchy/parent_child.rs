// src/hierarchy/parent_child.rs

//! Cell hierarchy.
//!
//! One generation multiplies the face size `n + 1` by 4. A parent's
//! coordinates scaled by 4 land on its center child; the cells within two
//! steps of it (19 of them) are its children. Children near the rim are
//! shared with adjacent parents, so a child may have two parents.

use crate::cell::Cell;
use crate::types::{CoordABC, CoordOffset, GridError};
use smallvec::SmallVec;

/// Linear subdivision factor between two generations.
pub const APERTURE: i64 = 4;

/// Maximum step distance from the center child to a child.
const CHILD_RADIUS: i64 = 2;

/// Parents of a cell: one, or two when the cell is equally shared.
///
/// With the `serde` feature it serializes as a list of identifiers.
pub type Parents = SmallVec<[Cell; 2]>;

/// Every balanced offset within `radius` steps, in lexicographic `(i, j)` order.
fn _offsets_within(radius: i64) -> impl Iterator<Item = CoordOffset> {
  (-radius..=radius)
    .flat_map(move |i| (-radius..=radius).map(move |j| CoordOffset::new(i, j, -i - j)))
    .filter(move |o| o.k.abs() <= radius)
}

/// The cell at the next generation whose center coincides with `cell`'s.
///
/// Fails with `InvalidResolution` if the finer grid cannot be addressed.
pub fn cell_to_center_child(cell: Cell) -> Result<Cell, GridError> {
  Cell::canonical(cell.face(), cell.coord().scale(APERTURE))
}

/// The 19 cells of the next generation covering `cell`, in lexicographic
/// offset order from the center child.
///
/// Children of cells next to an icosahedron vertex can coincide; they are
/// reported once, so fewer than 19 cells may be returned.
pub fn cell_to_children(cell: Cell) -> Result<Vec<Cell>, GridError> {
  let root = Cell::new(cell.face(), cell.coord().scale(APERTURE))?;
  let mut out: Vec<Cell> = Vec::with_capacity(19);
  for offset in _offsets_within(CHILD_RADIUS) {
    let child = root.neighbor(offset)?;
    if !out.contains(&child) {
      out.push(child);
    }
  }
  Ok(out)
}

/// Ancestors of `cell`, `generations` levels up.
///
/// Each coordinate is divided by `4^generations` and rounded to nearest, down
/// on exact halves. If the rounded triple does not have the parent sum, the
/// coordinate with the largest (respectively smallest) remainder absorbs the
/// difference. A tie between two coordinates yields both candidates.
///
/// `generations = 0` returns the cell itself. Fails with `InvalidResolution`
/// if `n + 1` is not a multiple of `4^generations`.
pub fn cell_to_parents(cell: Cell, generations: u32) -> Result<Parents, GridError> {
  let mut out = Parents::new();
  if generations == 0 {
    out.push(cell);
    return Ok(out);
  }
  let div = APERTURE.checked_pow(generations).ok_or(GridError::InvalidResolution)?;
  if cell.face_size() % div != 0 {
    return Err(GridError::InvalidResolution);
  }

  let pos = cell.coord().to_array();
  let rounded = pos.map(|p| {
    let q = p.div_euclid(div);
    if p.rem_euclid(div) > div / 2 {
      q + 1
    } else {
      q
    }
  });
  let delta: [i64; 3] = std::array::from_fn(|i| pos[i] - div * rounded[i]);
  let mut order = [0_usize, 1, 2];
  order.sort_by_key(|&i| delta[i]);

  let excess: i64 = delta.iter().sum();
  let mut candidates: SmallVec<[[i64; 3]; 2]> = SmallVec::new();
  if excess == 0 {
    candidates.push(rounded);
  } else {
    // Coordinate that absorbs the difference, and the one it may tie with.
    let (first, second, step) = if excess > 0 {
      (order[2], order[1], 1)
    } else {
      (order[0], order[1], -1)
    };
    let mut adjusted = rounded;
    adjusted[first] += step;
    candidates.push(adjusted);
    if delta[first] == delta[second] {
      let mut adjusted = rounded;
      adjusted[second] += step;
      candidates.push(adjusted);
    }
  }

  for candidate in candidates {
    let parent = Cell::canonical(cell.face(), CoordABC::from_array(candidate))?;
    if !out.contains(&parent) {
      out.push(parent);
    }
  }
  log::trace!("parents({cell}, {generations}) -> {out:?}");
  Ok(out)
}

impl Cell {
  /// See [`cell_to_children`].
  pub fn children(&self) -> Result<Vec<Cell>, GridError> {
    cell_to_children(*self)
  }

  /// See [`cell_to_center_child`].
  pub fn center_child(&self) -> Result<Cell, GridError> {
    cell_to_center_child(*self)
  }

  /// See [`cell_to_parents`].
  pub fn parents(&self, generations: u32) -> Result<Parents, GridError> {
    cell_to_parents(*self, generations)
  }
}
