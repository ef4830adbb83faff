//! Grid-wide constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// Square root of 3.
pub const M_SQRT3: f64 = 1.732_050_807_568_877_2;
/// sqrt(3) / 2.0, also known as sin(60 degrees)
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;

/// The golden ratio, (1 + sqrt(5)) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Distance from the icosahedron center to the center of a face, for the
/// icosahedron whose vertices are the cyclic permutations of `(0, ±1, ±PHI)`.
/// Equal to `sqrt(PHI^2 - 1/3)`.
pub const FACE_TO_CENTER: f64 = 1.511_522_628_152_341_5;

/// Distance from the icosahedron center to a vertex, `sqrt(1 + PHI^2)`.
pub const VERTEX_TO_CENTER: f64 = 1.902_113_032_590_307;

/// Angle at the face center subtended by half an edge on the Snyder
/// sub-triangle, `pi / 30`.
pub const SNYDER_SUBFACE_ANGLE: f64 = consts::PI / 30.0;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Number of faces on the icosahedron.
pub const NUM_ICOSA_FACES: usize = 20;

/// Number of vertices on a cell polygon.
pub const NUM_HEX_VERTS: usize = 6;

/// Largest resolution whose coordinates fit the 5-digit identifier fields.
pub const MAX_RESOLUTION: i64 = 99_998;

/// Length of a formatted cell identifier, `A00000-00000-00000`.
pub const CELL_ID_LEN: usize = 18;

/// Tolerance on `1 - v0.X` below which a point is snapped onto the nearest
/// icosahedron vertex by the Snyder forward projection.
pub const SNYDER_VERTEX_EPSILON: f64 = 1e-15;

/// Distance below which an unprojected Snyder point is snapped onto the
/// nearest icosahedron vertex.
pub const SNYDER_INV_VERTEX_EPSILON: f64 = 1e-12;

/// Accepted deviation of `|X|` from 1 for points handed to a projection.
pub const UNIT_NORM_EPSILON: f64 = 1e-9;

/// Threshold epsilon for geometric degeneracy checks.
pub const EPSILON: f64 = 1e-12;

/// Epsilon for floating point comparisons in radians (~0.1 mm on the ground).
pub const EPSILON_RAD: f64 = 1e-9 * M_PI_180;
