// tests/traversal_tests.rs

use std::collections::HashSet;
use xs_hexgrid::*;

fn cell(id: &str) -> Cell {
  id.parse().unwrap()
}

/// Every canonical cell of resolution `n`.
fn all_cells(n: i64) -> Vec<Cell> {
  let m = n + 1;
  let mut seen = HashSet::new();
  let mut out = Vec::new();
  for face in 0..20 {
    for a in 0..=m {
      for b in 0..=m {
        let c = 2 * m - a - b;
        if !(0..=m).contains(&c) {
          continue;
        }
        let cell = Cell::canonical(face, CoordABC::new(a, b, c)).unwrap();
        if seen.insert(cell) {
          out.push(cell);
        }
      }
    }
  }
  out
}

#[test]
fn test_neighbor_offsets() {
  let origin = cell("A00006-00024-00018");
  let cases = [
    (CoordOffset::new(1, -2, 1), "A00007-00022-00019"),
    (CoordOffset::new(0, 1, -1), "E00023-00007-00018"),
    (CoordOffset::new(18, 0, -18), "A00024-00024-00000"),
  ];
  for (offset, expected) in cases {
    assert_eq!(origin.neighbor(offset).unwrap().to_string(), expected, "{offset:?}");
  }
  assert_eq!(
    origin.neighbor(CoordOffset::new(0, 0, 1)),
    Err(GridError::InvalidOffset)
  );
}

#[test]
fn test_k_ring_near_vertex() {
  let origin = cell("A00001-00024-00023");
  let ring = origin.k_ring(2).unwrap();
  let expected: HashSet<&str> = [
    "J00001-00024-00023",
    "J00002-00023-00023",
    "F00024-00001-00023",
    "A00000-00024-00024",
    "E00023-00001-00024",
    "E00022-00002-00024",
    "F00023-00002-00023",
    "A00001-00023-00024",
    "E00024-00001-00023",
    "E00023-00002-00023",
    "E00022-00003-00023",
    "A00002-00022-00024",
    "A00002-00023-00023",
    "E00024-00002-00022",
    "E00023-00003-00022",
    "A00003-00022-00023",
    "A00003-00023-00022",
    "E00024-00003-00021",
  ]
  .into_iter()
  .collect();

  let ids: Vec<String> = ring.iter().map(ToString::to_string).collect();
  assert_eq!(ids.len(), expected.len(), "no duplicates");
  assert_eq!(ids.iter().map(String::as_str).collect::<HashSet<_>>(), expected);
  assert_eq!(ids[0], "E00024-00001-00023", "canonical origin first");
  assert!(ring.len() < max_k_ring_size(2).unwrap() as usize);
}

#[test]
fn test_k_ring_interior_is_full() {
  let origin = cell("K00020-00030-00022");
  for k in 0..5 {
    let ring = k_ring(origin, k).unwrap();
    assert_eq!(ring.len() as i64, max_k_ring_size(k).unwrap());
    assert_eq!(ring.iter().collect::<HashSet<_>>().len(), ring.len());
  }
  assert_eq!(k_ring(origin, -1), Err(GridError::InvalidArgument));
}

#[test]
fn test_neighbor_counts_and_symmetry() {
  for n in [1, 2, 5] {
    let cells = all_cells(n);
    assert_eq!(cells.len() as i64, num_cells(n).unwrap());
    let mut pentagons = 0;
    for c in &cells {
      let neighbors = c.neighbors().unwrap();
      if c.is_pentagon() {
        pentagons += 1;
        assert_eq!(neighbors.len(), 5, "{c}");
      } else {
        assert_eq!(neighbors.len(), 6, "{c}");
      }
      for nb in &neighbors {
        assert_eq!(are_neighbor_cells(*nb, *c), Ok(true), "{c} -> {nb}");
      }
    }
    assert_eq!(pentagons, 12);
  }
}

#[test]
fn test_are_neighbor_cells_accepts_raw_cells() {
  // Same vertex cell written on two faces.
  let owner = cell("A00024-00024-00000");
  let raw = Cell::new(3, CoordABC::new(24, 24, 0)).unwrap();
  assert_eq!(raw.to_canonical(), Ok(owner));
  for nb in owner.neighbors().unwrap() {
    assert_eq!(are_neighbor_cells(raw, nb), Ok(true));
  }
}
