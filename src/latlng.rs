// src/latlng.rs

use crate::constants::{EARTH_RADIUS_KM, M_180_PI, M_PI_180, M_PI_2};
use crate::math::vec3d::{_geo_to_vec3d, _v3d_angle, _v3d_mag, _vec3d_to_geo};
use crate::types::{GridError, LatLng, Vec3d};

impl LatLng {
  /// Creates a coordinate from radians.
  #[inline]
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Creates a coordinate from decimal degrees.
  #[inline]
  #[must_use]
  pub fn from_degrees(lat_degs: f64, lng_degs: f64) -> Self {
    Self {
      lat: degs_to_rads(lat_degs),
      lng: degs_to_rads(lng_degs),
    }
  }

  /// `(lat, lng)` in decimal degrees.
  #[inline]
  #[must_use]
  pub fn to_degrees(&self) -> (f64, f64) {
    (rads_to_degs(self.lat), rads_to_degs(self.lng))
  }

  /// `[lng, lat]` in decimal degrees, the GeoJSON position order.
  #[inline]
  #[must_use]
  pub fn to_lng_lat_degrees(&self) -> [f64; 2] {
    [rads_to_degs(self.lng), rads_to_degs(self.lat)]
  }
}

/// Unit vector of a latitude/longitude pair in radians.
///
/// Latitudes must lie in `[-pi/2, pi/2]`; any finite longitude is accepted.
pub fn lat_lng_to_vec3d(geo: &LatLng) -> Result<Vec3d, GridError> {
  if !geo.lat.is_finite() || !geo.lng.is_finite() || geo.lat.abs() > M_PI_2 {
    return Err(GridError::LatLngDomain);
  }
  Ok(_geo_to_vec3d(geo))
}

/// Latitude/longitude in radians of a non-zero 3D vector.
pub fn vec3d_to_lat_lng(point: &Vec3d) -> Result<LatLng, GridError> {
  let mag = _v3d_mag(point);
  if !mag.is_finite() || mag == 0.0 {
    return Err(GridError::InvalidPoint);
  }
  Ok(_vec3d_to_geo(point))
}

/// The great circle distance in radians between two spherical coordinates.
///
/// Uses the haversine formula.
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat_half = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng_half = ((b.lng - a.lng) * 0.5).sin();
  let h = (sin_lat_half * sin_lat_half + a.lat.cos() * b.lat.cos() * sin_lng_half * sin_lng_half).clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// The great circle distance in kilometers between two spherical coordinates.
pub fn great_circle_distance_km(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// The great circle distance in kilometers between two unit vectors.
pub(crate) fn _vec3d_distance_km(a: &Vec3d, b: &Vec3d) -> f64 {
  _v3d_angle(a, b) * EARTH_RADIUS_KM
}

/// Converts degrees to radians.
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}
