// tests/resolution_tests.rs

use xs_hexgrid::*;

#[test]
fn test_n_for_height() {
  assert_eq!(compute_n_for_height(0.25), Ok(15348));
  assert_eq!(compute_n_for_height(2.5), Ok(1534));
  assert_eq!(compute_n_for_height(50.0), Ok(76));
}

#[test]
fn test_sizes_for_n() {
  // (n, height, radius, side), exact.
  let cases = [
    (15348, 0.2499983483713541, 0.2625170496179913, 0.28867322745832624),
    (1534, 2.4998206183400087, 2.624999475300683, 2.8865442138487616),
    (76, 49.83408635262226, 52.32953499463051, 57.54344634101103),
  ];
  for (n, height, radius, side) in cases {
    assert_eq!(compute_height_for_n(n), Ok(height));
    assert_eq!(compute_radius_for_n(n), Ok(radius));
    assert_eq!(compute_side_for_n(n), Ok(side));
  }
}

#[test]
fn test_n_for_radius_and_side() {
  assert_eq!(compute_n_for_radius(0.25), Ok(16116));
  assert_eq!(compute_n_for_side(0.25), Ok(17722));
}

#[test]
fn test_cell_sizes_follow_resolution() {
  let cell: Cell = "A00077-00077-00000".parse().unwrap();
  assert_eq!(cell.resolution(), 76);
  assert_eq!(cell.compute_height(), compute_height_for_n(76));
  assert_eq!(cell.compute_radius(), compute_radius_for_n(76));
  assert_eq!(cell.compute_side(), compute_side_for_n(76));
}

#[test]
fn test_num_cells() {
  assert_eq!(num_cells(35), Ok(10 * 36 * 36 + 2));
  let area = cell_area_avg_km2(35).unwrap();
  let sphere = 4.0 * std::f64::consts::PI * EARTH_RADIUS_KM * EARTH_RADIUS_KM;
  assert!((area * 10.0 * 36.0 * 36.0 - sphere).abs() / sphere < 1e-12);
  assert_eq!(num_cells(MAX_RESOLUTION + 1), Err(GridError::InvalidResolution));
}
