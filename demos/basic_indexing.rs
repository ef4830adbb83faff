use xs_hexgrid::{
  compute_n_for_radius, rads_to_degs, Cell, CellPolygon, GridConfig, GridError, HexGrid, LatLng, PolygonFormat,
  ProjectionKind,
};

fn main() -> Result<(), GridError> {
  println!("--- Basic Hex Grid Indexing Example ---");

  // 1. Define a LatLng point (e.g., San Francisco City Hall)
  let lat_deg = 37.779265;
  let lng_deg = -122.419277;
  let point = LatLng::from_degrees(lat_deg, lng_deg);
  println!("Original Point: Lat {lat_deg:.6} deg, Lng {lng_deg:.6} deg");

  // 2. Pick the resolution whose cells have a radius of about 10 km
  let n = compute_n_for_radius(10.0)?;
  let grid = HexGrid::new(GridConfig::new(n).with_projection(ProjectionKind::SnyderEqualArea))?;
  println!("Resolution for 10 km cells: {n}");

  // 3. Find the cell containing this point
  let cell: Cell = grid.lat_lng_to_cell(&point)?;
  println!("Cell: {cell} (face {}, {:?})", cell.face(), cell.coord());
  println!("Is Pentagon: {}", cell.is_pentagon());
  println!(
    "Nominal radius {:.3} km, measured radius {:.3} km",
    cell.compute_radius()?,
    grid.effective_radius_km(cell)?
  );

  // 4. Get the center of the cell
  let center = grid.cell_to_lat_lng(cell)?;
  println!(
    "Cell Center: Lat {:.6} deg, Lng {:.6} deg",
    rads_to_degs(center.lat),
    rads_to_degs(center.lng)
  );

  // 5. Get the boundary of the cell
  let boundary = grid.cell_to_boundary(cell)?;
  println!("Cell Boundary ({} vertices):", boundary.verts.len());
  for (i, v) in boundary.verts.iter().enumerate() {
    let (lat, lng) = v.to_degrees();
    println!("  Vertex {i}: Lat {lat:.6} deg, Lng {lng:.6} deg");
  }
  if let CellPolygon::GeoJson(geometry) = grid.cell_to_polygon(cell, PolygonFormat::GeoJson)? {
    println!("GeoJSON ring: {} positions", geometry.coordinates[0].len());
  }

  println!("\n--- Traversal Example ---");
  // 6. Neighbors and a 2-ring
  let neighbors = cell.neighbors()?;
  println!("{} neighbors: {:?}", neighbors.len(), neighbors.iter().map(ToString::to_string).collect::<Vec<_>>());
  println!("2-ring size: {}", cell.k_ring(2)?.len());

  // 7. Cells within a 5 km overlap of the point
  let mut overlapping = grid;
  overlapping.set_overlap(5.0)?;
  println!("Cells within the overlap: {}", overlapping.lat_lng_to_cells(&point)?.len());

  println!("\n--- Hierarchy Example ---");
  // 8. Children live at resolution 4 (n + 1) - 1
  let children = cell.children()?;
  let center_child = cell.center_child()?;
  println!("{} children, center child {center_child} at resolution {}", children.len(), center_child.resolution());

  // 9. Going back up
  let parents = center_child.parents(1)?;
  println!("Parents of {center_child}: {:?}", parents.iter().map(ToString::to_string).collect::<Vec<_>>());

  Ok(())
}
