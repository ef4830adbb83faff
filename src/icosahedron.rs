// src/icosahedron.rs

//! The fixed icosahedron the grid is built on.
//!
//! The model is the icosahedron whose 12 vertices are the cyclic permutations
//! of `(0, ±1, ±PHI)`, with every vector scaled down to the unit sphere. Each
//! face carries an ordered vertex triple `(a, b, c)`, the unit normal `k` and
//! an orthonormal in-plane basis `(e1, e2)` where `e1` runs along the edge
//! `a -> b` and `e2 = k x e1`.

use crate::constants::{NUM_ICOSA_FACES, PHI, VERTEX_TO_CENTER};
use crate::math::vec3d::{_v3d_cross, _v3d_dot, _v3d_normalize};
use crate::types::{GridError, Vec3d};
use std::sync::OnceLock;

const P: f64 = PHI;
const P1: f64 = 1.0 + PHI;
const P2: f64 = 2.0 * PHI + 1.0;
const Q: f64 = PHI - 1.0;

/// Face normals before normalization.
#[rustfmt::skip]
static RAW_NORMALS: [[f64; 3]; NUM_ICOSA_FACES] = [
  [ P2,   P,  0.0], [ P1,  P1,  P1], [  P, 0.0,  P2], [ P1, -P1,  P1], [ P2,  -P, 0.0],
  [ P1,  P1, -P1], [0.0,  P2,   P], [ -P, 0.0,  P2], [0.0, -P2,   P], [ P1, -P1, -P1],
  [-P2,   P, 0.0], [-P1,  P1, -P1], [ -P, 0.0, -P2], [-P1, -P1, -P1], [-P2,  -P, 0.0],
  [-P1,  P1,  P1], [0.0,  P2,  -P], [  P, 0.0, -P2], [0.0, -P2,  -P], [-P1, -P1,  P1],
];

/// First ("directing") vertex of each face, unscaled.
#[rustfmt::skip]
static RAW_A: [[f64; 3]; NUM_ICOSA_FACES] = [
  [  P, 0.0, -1.0], [ 1.0,   P, 0.0], [0.0,  1.0,   P], [0.0, -1.0,   P], [ 1.0,  -P, 0.0],
  [1.0,   P,  0.0], [ 0.0, 1.0,   P], [0.0, -1.0,   P], [1.0,   -P, 0.0], [   P, 0.0, -1.0],
  [ -P, 0.0,  1.0], [-1.0,   P, 0.0], [0.0,  1.0,  -P], [0.0, -1.0,  -P], [-1.0,  -P, 0.0],
  [-1.0,  P,  0.0], [ 0.0, 1.0,  -P], [0.0, -1.0,  -P], [-1.0,  -P, 0.0], [  -P, 0.0,  1.0],
];

/// Edge `b - a` of each face, unscaled (length 2).
#[rustfmt::skip]
static RAW_EDGE: [[f64; 3]; NUM_ICOSA_FACES] = [
  [  -Q,    P,  1.0], [-1.0,   -Q,    P], [0.0, -2.0,  0.0], [ 1.0,   -Q,   -P], [   Q,    P, -1.0],
  [   Q,   -P, -1.0], [ 1.0,    Q,   -P], [0.0,  2.0,  0.0], [-1.0,    Q,    P], [  -Q,   -P,  1.0],
  [   Q,    P, -1.0], [ 1.0,   -Q,   -P], [0.0, -2.0,  0.0], [-1.0,   -Q,    P], [  -Q,    P,  1.0],
  [  -Q,   -P,  1.0], [-1.0,    Q,    P], [0.0,  2.0,  0.0], [ 1.0,    Q,   -P], [   Q,   -P, -1.0],
];

/// Face reached by leaving a face across the edge opposite vertex
/// `a`, `b` and `c` respectively.
#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[u8; 3]; NUM_ICOSA_FACES] = [
  [ 1,  4,  5], [ 2,  0,  6], [ 3,  1,  7], [ 4,  2,  8], [ 0,  3,  9],
  [17, 16,  0], [16, 15,  1], [15, 19,  2], [19, 18,  3], [18, 17,  4],
  [11, 14, 15], [12, 10, 16], [13, 11, 17], [14, 12, 18], [10, 13, 19],
  [ 7,  6, 10], [ 6,  5, 11], [ 5,  9, 12], [ 9,  8, 13], [ 8,  7, 14],
];

/// Position of a face in the icosahedron layout.
///
/// Faces `0..5` and `10..15` form the two polar caps. The belt is split into
/// faces `5..10`, adjacent to the first cap, and faces `15..20`, adjacent to
/// the second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceClass {
  /// Faces 0-4 and 10-14.
  Cap = 0,
  /// Faces 5-9.
  LeadingBelt = 1,
  /// Faces 15-19.
  TrailingBelt = 2,
}

impl FaceClass {
  /// Classifies a face index. The caller guarantees `face < 20`.
  #[inline]
  #[must_use]
  pub fn of(face: usize) -> Self {
    if face % 10 < 5 {
      FaceClass::Cap
    } else if face < 10 {
      FaceClass::LeadingBelt
    } else {
      FaceClass::TrailingBelt
    }
  }

  /// Returns `true` for the two polar caps.
  #[inline]
  #[must_use]
  pub fn is_cap(self) -> bool {
    self == FaceClass::Cap
  }
}

/// Geometry of one icosahedron face.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaceGeometry {
  /// Unit outward normal.
  pub normal: Vec3d,
  /// Ordered unit vertices `(a, b, c)`.
  pub vertices: [Vec3d; 3],
  /// Unit vector along the edge `a -> b`.
  pub e1: Vec3d,
  /// `normal x e1`, pointing from edge `ab` towards vertex `c`.
  pub e2: Vec3d,
}

/// The 20 faces of the icosahedron.
#[derive(Debug, Clone, PartialEq)]
pub struct Icosahedron {
  faces: [FaceGeometry; NUM_ICOSA_FACES],
}

static MODEL: OnceLock<Icosahedron> = OnceLock::new();

/// Returns the shared icosahedron model, building it on first use.
#[must_use]
pub fn icosahedron() -> &'static Icosahedron {
  MODEL.get_or_init(Icosahedron::build)
}

#[inline]
fn _from_raw(raw: &[f64; 3]) -> Vec3d {
  Vec3d::new(raw[0], raw[1], raw[2])
}

impl Icosahedron {
  fn build() -> Self {
    let mut faces = [FaceGeometry::default(); NUM_ICOSA_FACES];
    let sqrt3 = 3.0_f64.sqrt();
    for (f, geom) in faces.iter_mut().enumerate() {
      let normal = _v3d_normalize(&_from_raw(&RAW_NORMALS[f]));
      let edge = _from_raw(&RAW_EDGE[f]);
      let a = _from_raw(&RAW_A[f]);
      let b = a + edge;
      let e1 = edge * 0.5;
      let e2 = _v3d_cross(&normal, &e1);
      let c = (a + b) * 0.5 + e2 * sqrt3;

      let scale = 1.0 / VERTEX_TO_CENTER;
      *geom = FaceGeometry {
        normal,
        vertices: [a * scale, b * scale, c * scale],
        e1,
        e2,
      };
    }
    log::debug!("built icosahedron model with {NUM_ICOSA_FACES} faces");
    Self { faces }
  }

  /// Returns the geometry of `face`.
  pub fn face(&self, face: usize) -> Result<&FaceGeometry, GridError> {
    self.faces.get(face).ok_or(GridError::InvalidFace)
  }

  /// All faces, indexed by face number.
  #[must_use]
  pub fn faces(&self) -> &[FaceGeometry; NUM_ICOSA_FACES] {
    &self.faces
  }

  /// Face whose normal is closest to `point`, i.e. the face the central
  /// projection of `point` lands on. Ties go to the lowest face index.
  #[must_use]
  pub fn nearest_face(&self, point: &Vec3d) -> usize {
    let mut best = 0;
    let mut best_dot = f64::NEG_INFINITY;
    for (f, geom) in self.faces.iter().enumerate() {
      let d = _v3d_dot(&geom.normal, point);
      if d > best_dot {
        best_dot = d;
        best = f;
      }
    }
    best
  }

  /// Face across the edge opposite vertex `axis` (0 = a, 1 = b, 2 = c).
  pub fn opposite_neighbor(&self, face: usize, axis: usize) -> Result<usize, GridError> {
    _face_neighbor(face, axis)
  }
}

/// Table lookup behind [`Icosahedron::opposite_neighbor`], usable without
/// touching the model.
#[inline]
pub(crate) fn _face_neighbor(face: usize, axis: usize) -> Result<usize, GridError> {
  FACE_NEIGHBORS
    .get(face)
    .ok_or(GridError::InvalidFace)?
    .get(axis)
    .map(|&f| usize::from(f))
    .ok_or(GridError::InvalidArgument)
}
