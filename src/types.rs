//! Core grid data structures.

use crate::constants::NUM_HEX_VERTS;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Latitude/longitude coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

/// 2D floating-point vector, used for points in a face-local plane.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Triangular hexagon coordinates on an icosahedron face.
///
/// For a grid of resolution `n`, valid coordinates lie in `0..=n+1` and sum
/// to `2 * (n + 1)`. A zero component marks a cell centered on an icosahedron
/// vertex, a component equal to `n + 1` a cell centered on a face edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordABC {
  /// A component, 0 on the face's first vertex.
  pub a: i64,
  /// B component, 0 on the face's second vertex.
  pub b: i64,
  /// C component, 0 on the face's third vertex.
  pub c: i64,
}

/// Step applied to a cell's coordinates to reach another cell.
///
/// The components must sum to zero for the step to stay on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordOffset {
  /// Change of the A component.
  pub i: i64,
  /// Change of the B component.
  pub j: i64,
  /// Change of the C component.
  pub k: i64,
}

/// Spherical boundary of a cell, in the cell's winding order.
///
/// Every cell has six corners. A cell centered on an icosahedron vertex
/// repeats one corner, as it only has five distinct ones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellBoundary {
  /// Corners in radians.
  pub verts: [LatLng; NUM_HEX_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      verts: [LatLng::default(); NUM_HEX_VERTS],
    }
  }
}

/// Output shapes for [`crate::HexGrid::cell_to_polygon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum PolygonFormat {
  /// Six unit vectors.
  #[default]
  Xyz = 0,
  /// Closed ring of `LatLng` in radians.
  LatLng = 1,
  /// Closed ring of `[lng, lat]` pairs in degrees.
  LngLat = 2,
  /// GeoJSON `Polygon` geometry, `[lng, lat]` in degrees.
  GeoJson = 3,
}

impl TryFrom<u8> for PolygonFormat {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(PolygonFormat::Xyz),
      1 => Ok(PolygonFormat::LatLng),
      2 => Ok(PolygonFormat::LngLat),
      3 => Ok(PolygonFormat::GeoJson),
      _ => Err(GridError::InvalidArgument),
    }
  }
}

/// GeoJSON `Polygon` geometry with a single outer ring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoJsonPolygon {
  /// Always `"Polygon"`.
  #[cfg_attr(feature = "serde", serde(rename = "type"))]
  pub geometry_type: String,
  /// Linear rings of `[lng, lat]` in degrees. The first ring is the exterior
  /// ring and is closed (its last position repeats the first).
  pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl GeoJsonPolygon {
  /// Builds a polygon geometry from a single closed ring.
  #[must_use]
  pub fn from_ring(ring: Vec<[f64; 2]>) -> Self {
    Self {
      geometry_type: "Polygon".to_string(),
      coordinates: vec![ring],
    }
  }
}

/// A cell polygon in one of the [`PolygonFormat`] shapes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellPolygon {
  /// Six unit vectors.
  Xyz(Vec<Vec3d>),
  /// Closed ring in radians.
  LatLng(Vec<LatLng>),
  /// Closed ring of `[lng, lat]` in degrees.
  LngLat(Vec<[f64; 2]>),
  /// GeoJSON geometry.
  GeoJson(GeoJsonPolygon),
}

impl CellPolygon {
  /// Number of positions held, including the closing position of rings.
  #[must_use]
  pub fn len(&self) -> usize {
    match self {
      CellPolygon::Xyz(v) => v.len(),
      CellPolygon::LatLng(v) => v.len(),
      CellPolygon::LngLat(v) => v.len(),
      CellPolygon::GeoJson(g) => g.coordinates.first().map_or(0, Vec::len),
    }
  }

  /// Returns `true` if the polygon holds no position.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Grid error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GridError {
  /// Face index was outside `0..20`.
  #[error("face index out of range")]
  InvalidFace = 1,
  /// Resolution was negative, too large, or inconsistent with the coordinates.
  #[error("resolution out of range or inconsistent")]
  InvalidResolution = 2,
  /// Point was not a finite unit vector.
  #[error("point is not a finite unit vector")]
  InvalidPoint = 3,
  /// Latitude or longitude arguments were outside of acceptable range.
  #[error("latitude or longitude out of range")]
  LatLngDomain = 4,
  /// Point could not be projected onto the requested face.
  #[error("point cannot be projected onto the face")]
  DegenerateProjection = 5,
  /// Coordinates could not be brought inside a face.
  #[error("coordinates out of face bounds")]
  OutOfFaceBounds = 6,
  /// Cell identifier string did not parse.
  #[error("malformed cell identifier")]
  MalformedIdentifier = 7,
  /// Cell offset did not sum to zero.
  #[error("cell offset does not sum to zero")]
  InvalidOffset = 8,
  /// Distance argument was negative, zero or not finite.
  #[error("distance must be finite and positive")]
  InvalidDistance = 9,
  /// Option or mode argument was not valid.
  #[error("invalid argument")]
  InvalidArgument = 10,
}
