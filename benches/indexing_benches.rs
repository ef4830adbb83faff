use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xs_hexgrid::*;

// --- Fixtures for benchmarks ---
fn get_fixed_latlng() -> LatLng {
  LatLng::from_degrees(37.7749, -122.4194) // San Francisco
}

fn get_grid(n: i64, projection: ProjectionKind) -> HexGrid {
  HexGrid::new(GridConfig::new(n).with_projection(projection)).unwrap()
}

// --- Benchmark Functions ---

fn bench_lat_lng_to_cell(c: &mut Criterion) {
  let latlng = get_fixed_latlng();
  let mut group = c.benchmark_group("lat_lng_to_cell");

  for projection in [ProjectionKind::Gnomonic, ProjectionKind::SnyderEqualArea] {
    for n in [35, 1534, 15348] {
      let grid = get_grid(n, projection);
      group.bench_function(format!("{projection:?}_n_{n}"), |b| {
        b.iter(|| grid.lat_lng_to_cell(black_box(&latlng)));
      });
    }
  }
  group.finish();
}

fn bench_lat_lng_to_cells_with_overlap(c: &mut Criterion) {
  let latlng = get_fixed_latlng();
  let height = compute_height_for_n(35).unwrap();
  let grid = HexGrid::new(GridConfig::default().with_overlap_km(2.0 * height)).unwrap();
  c.bench_function("lat_lng_to_cells_overlap", |b| {
    b.iter(|| grid.lat_lng_to_cells(black_box(&latlng)));
  });
}

fn bench_cell_to_lat_lng(c: &mut Criterion) {
  let grid = get_grid(35, ProjectionKind::SnyderEqualArea);
  let hex = grid.lat_lng_to_cell(&get_fixed_latlng()).unwrap();
  let pentagon: Cell = "A00036-00036-00000".parse().unwrap();

  c.benchmark_group("cell_to_lat_lng")
    .bench_function("hexagon", |b| b.iter(|| grid.cell_to_lat_lng(black_box(hex))))
    .bench_function("pentagon", |b| b.iter(|| grid.cell_to_lat_lng(black_box(pentagon))));
}

fn bench_cell_to_polygon(c: &mut Criterion) {
  let grid = get_grid(35, ProjectionKind::SnyderEqualArea);
  let hex = grid.lat_lng_to_cell(&get_fixed_latlng()).unwrap();
  // Corners on two faces.
  let edge: Cell = "E00036-00018-00018".parse().unwrap();

  c.benchmark_group("cell_to_polygon")
    .bench_function("hex_xyz", |b| {
      b.iter(|| grid.cell_to_polygon(black_box(hex), PolygonFormat::Xyz))
    })
    .bench_function("edge_xyz", |b| {
      b.iter(|| grid.cell_to_polygon(black_box(edge), PolygonFormat::Xyz))
    })
    .bench_function("hex_geojson", |b| {
      b.iter(|| grid.cell_to_polygon(black_box(hex), PolygonFormat::GeoJson))
    });
}

fn bench_string_conv(c: &mut Criterion) {
  let cell: Cell = "E00036-00018-00018".parse().unwrap();
  c.benchmark_group("string_conv")
    .bench_function("parse", |b| b.iter(|| black_box("E00036-00018-00018").parse::<Cell>()))
    .bench_function("format", |b| b.iter(|| black_box(cell).to_string()));
}

fn bench_traversal(c: &mut Criterion) {
  let origin: Cell = "K00020-00030-00022".parse().unwrap();
  let vertex: Cell = "A00001-00024-00023".parse().unwrap();

  c.benchmark_group("traversal")
    .bench_function("neighbors", |b| b.iter(|| black_box(origin).neighbors()))
    .bench_function("k_ring_5", |b| b.iter(|| k_ring(black_box(origin), 5)))
    .bench_function("k_ring_5_vertex", |b| b.iter(|| k_ring(black_box(vertex), 5)))
    .bench_function("children", |b| b.iter(|| black_box(origin).children()))
    .bench_function("parents", |b| b.iter(|| cell_to_parents(black_box(origin), 1)));
}

// Register benchmark groups
criterion_group!(
  indexing_benches,
  bench_lat_lng_to_cell,
  bench_lat_lng_to_cells_with_overlap,
  bench_cell_to_lat_lng,
  bench_cell_to_polygon,
  bench_string_conv,
  bench_traversal
);
criterion_main!(indexing_benches);
