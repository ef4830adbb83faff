// src/coords/face_abc.rs

//! Face-bound coordinate maintenance: moving triples that overflow their face
//! onto the neighboring face, and choosing a single owner face for cells
//! centered on icosahedron edges and vertices.

use super::abc::{TripleScalar, _apply_transform, Term, TriTransform, IDENTITY};
use crate::constants::NUM_ICOSA_FACES;
use crate::icosahedron::{FaceClass, _face_neighbor};
use crate::types::GridError;

use Term::{Flip, Fold, Keep};

/// Rewrite of a triple leaving its face across the edge where component
/// `axis` exceeds `m`, indexed by `[axis][is_cap]`.
#[rustfmt::skip]
static CROSSINGS: [[TriTransform; 2]; 3] = [
  //  belt                          cap
  [[Fold(0), Flip(1), Flip(2)], [Flip(2), Fold(0), Flip(1)]],
  [[Flip(0), Fold(1), Flip(2)], [Fold(1), Flip(2), Flip(0)]],
  [[Flip(0), Flip(1), Fold(2)], [Flip(0), Flip(1), Fold(2)]],
];

/// Brings a triple back inside `[0, m]` by walking across face edges.
///
/// Components are checked in `a, b, c` order; each crossing reflects the
/// triple into the neighbor face's frame. Components below zero are left as
/// they are, callers building cells range check the result.
pub(crate) fn _rectify<T: TripleScalar>(face: usize, pos: [T; 3], m: T) -> Result<(usize, [T; 3]), GridError> {
  let mut face = face;
  let mut pos = pos;
  for _ in 0..=NUM_ICOSA_FACES {
    let Some(axis) = (0..3).find(|&i| pos[i] > m) else {
      return Ok((face, pos));
    };
    let next = _face_neighbor(face, axis)?;
    let transform = &CROSSINGS[axis][usize::from(FaceClass::of(face).is_cap())];
    log::trace!("rectify: {pos:?} leaves face {face} over axis {axis} into face {next}");
    pos = _apply_transform(transform, &pos, m);
    face = next;
  }
  Err(GridError::OutOfFaceBounds)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cycle {
  /// Slot 0.
  Anchor,
  /// `(f + k) mod 5`
  Shift(i32),
  /// `(k - f) mod 5`
  Mirror(i32),
}

/// Offset of the target face's group of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
  /// Same group of ten as the source face.
  SameHalf,
  /// The other group of ten.
  OppositeHalf,
  /// Faces 5-9.
  LeadingBelt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FaceRule {
  Keep,
  Map(Cycle, Group),
}

impl FaceRule {
  fn apply(self, face: usize) -> usize {
    let FaceRule::Map(cycle, group) = self else {
      return face;
    };
    let f = face as i32;
    let slot = match cycle {
      Cycle::Anchor => 0,
      Cycle::Shift(k) => (f + k).rem_euclid(5),
      Cycle::Mirror(k) => (k - f).rem_euclid(5),
    };
    let base = match group {
      Group::SameHalf => 10 * (f / 10),
      Group::OppositeHalf => 10 * (1 - f / 10),
      Group::LeadingBelt => 5,
    };
    (slot + base) as usize
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SeamRule {
  face: FaceRule,
  coord: TriTransform,
}

const KEEP: SeamRule = SeamRule {
  face: FaceRule::Keep,
  coord: IDENTITY,
};

const fn rule(face: FaceRule, coord: TriTransform) -> SeamRule {
  SeamRule { face, coord }
}

const SWAP_AB: TriTransform = [Keep(1), Keep(0), Keep(2)];

/// Owner of a cell centered on the vertex where component `axis` is 0,
/// indexed by `[axis][FaceClass]`.
#[rustfmt::skip]
static VERTEX_SEAMS: [[SeamRule; 3]; 3] = [
  [
    KEEP,
    rule(FaceRule::Map(Cycle::Shift(1), Group::SameHalf), IDENTITY),
    rule(FaceRule::Map(Cycle::Shift(1), Group::SameHalf), IDENTITY),
  ],
  [
    rule(FaceRule::Map(Cycle::Shift(1), Group::SameHalf), SWAP_AB),
    rule(FaceRule::Map(Cycle::Shift(0), Group::SameHalf), SWAP_AB),
    rule(FaceRule::Map(Cycle::Shift(0), Group::SameHalf), SWAP_AB),
  ],
  [
    rule(FaceRule::Map(Cycle::Anchor, Group::SameHalf), IDENTITY),
    rule(FaceRule::Map(Cycle::Mirror(2), Group::OppositeHalf), [Keep(2), Keep(0), Keep(1)]),
    rule(FaceRule::Map(Cycle::Mirror(2), Group::OppositeHalf), [Keep(2), Keep(0), Keep(1)]),
  ],
];

/// Owner of a cell centered on the edge where component `axis` equals `m`,
/// indexed by `[axis][FaceClass]`.
#[rustfmt::skip]
static EDGE_SEAMS: [[SeamRule; 3]; 3] = [
  [
    KEEP,
    KEEP,
    rule(FaceRule::Map(Cycle::Mirror(2), Group::LeadingBelt), [Keep(0), Flip(1), Flip(2)]),
  ],
  [
    rule(FaceRule::Map(Cycle::Shift(-1), Group::SameHalf), [Keep(1), Flip(2), Flip(0)]),
    KEEP,
    rule(FaceRule::Map(Cycle::Mirror(1), Group::LeadingBelt), [Flip(0), Keep(1), Flip(2)]),
  ],
  [
    KEEP,
    rule(FaceRule::Map(Cycle::Shift(0), Group::SameHalf), [Flip(0), Flip(1), Keep(2)]),
    rule(FaceRule::Map(Cycle::Shift(0), Group::SameHalf), [Flip(0), Flip(1), Keep(2)]),
  ],
];

/// Rewrites an in-range triple sitting on a face seam into the frame of the
/// face that owns it. Interior cells are returned unchanged.
///
/// The operation is idempotent: an owned representation maps to itself.
#[must_use]
pub(crate) fn _resolve_seams(face: usize, pos: [i64; 3], m: i64) -> (usize, [i64; 3]) {
  let class = FaceClass::of(face) as usize;
  let seam = if let Some(axis) = pos.iter().position(|&v| v == 0) {
    VERTEX_SEAMS[axis][class]
  } else if let Some(axis) = [2, 0, 1].into_iter().find(|&i| pos[i] == m) {
    EDGE_SEAMS[axis][class]
  } else {
    return (face, pos);
  };
  (seam.face.apply(face), _apply_transform(&seam.coord, &pos, m))
}
