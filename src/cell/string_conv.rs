// src/cell/string_conv.rs

//! Cell identifiers: the face letter followed by the three coordinates as
//! zero-padded 5-digit fields, e.g. `E00036-00018-00018`.

use super::Cell;
use crate::constants::CELL_ID_LEN;
use crate::types::{CoordABC, GridError};
use std::fmt;
use std::str::FromStr;

/// Face letters, indexed by face number.
const FACE_LETTERS: &[u8; 20] = b"ABCDEFGHIJKLMNOPQRST";

/// Byte offsets of the three 5-digit coordinate fields.
const FIELD_STARTS: [usize; 3] = [1, 7, 13];
const FIELD_LEN: usize = 5;

/// Parses a cell identifier.
///
/// The identifier must be exactly 18 ASCII characters with an upper-case face
/// letter in `A..=T` and `-` separators. The cell is returned as written; use
/// [`Cell::to_canonical`] to move it to its owner face.
pub fn string_to_cell(s: &str) -> Result<Cell, GridError> {
  let bytes = s.as_bytes();
  if bytes.len() != CELL_ID_LEN || bytes[6] != b'-' || bytes[12] != b'-' {
    return Err(GridError::MalformedIdentifier);
  }
  let face = FACE_LETTERS
    .iter()
    .position(|&l| l == bytes[0])
    .ok_or(GridError::MalformedIdentifier)?;

  let mut coord = [0_i64; 3];
  for (slot, start) in coord.iter_mut().zip(FIELD_STARTS) {
    let field = &bytes[start..start + FIELD_LEN];
    if !field.iter().all(u8::is_ascii_digit) {
      return Err(GridError::MalformedIdentifier);
    }
    *slot = field.iter().fold(0, |acc, &d| acc * 10 + i64::from(d - b'0'));
  }
  Cell::new(face, CoordABC::from_array(coord))
}

/// Formats a cell identifier.
#[must_use]
pub fn cell_to_string(cell: Cell) -> String {
  cell.to_string()
}

impl fmt::Display for Cell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let letter = char::from(FACE_LETTERS[self.face()]);
    let CoordABC { a, b, c } = self.coord();
    write!(f, "{letter}{a:05}-{b:05}-{c:05}")
  }
}

impl FromStr for Cell {
  type Err = GridError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    string_to_cell(s)
  }
}

impl TryFrom<String> for Cell {
  type Error = GridError;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    string_to_cell(&s)
  }
}

impl From<Cell> for String {
  fn from(cell: Cell) -> Self {
    cell.to_string()
  }
}
