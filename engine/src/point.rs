//! Point and result types produced by the engine.
//!
//! Serde field names follow the explorer's wire format so the serialized
//! bundle can feed the existing frontend unchanged.

use serde::{Deserialize, Serialize};

/// A point (x, y) satisfying an affine curve equation.
///
/// Real-mode samples are arbitrary floats; Modulo-mode points are field
/// coordinates widened from [`FieldPoint`], so both coordinates are exact
/// small integers.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffinePoint {
    pub x: f64,
    pub y: f64,
}

/// A point (x, y) on a curve over Z/pZ, both coordinates in `[0, p)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPoint {
    pub x: i64,
    pub y: i64,
}

/// A projective sample (X : Y : Z) taken on a homogeneous curve form.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomogeneousPoint {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
}

/// A point on a 3D display surface (sphere or torus).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// The assembled output bundle for one generation request.
///
/// Real mode fills `points_2d`, `homogeneous_points_2d` and `sphere` and
/// leaves `torus` empty; Modulo mode fills `points_2d`, `torus` and `sphere`
/// and leaves `homogeneous_points_2d` empty. No coordinate in any sequence
/// is ever NaN or infinite.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveResult {
    #[serde(rename = "points2D")]
    pub points_2d: Vec<AffinePoint>,
    #[serde(rename = "homogeneousPoints2D")]
    pub homogeneous_points_2d: Vec<HomogeneousPoint>,
    pub torus: Vec<ProjectedPoint>,
    pub sphere: Vec<ProjectedPoint>,
}
