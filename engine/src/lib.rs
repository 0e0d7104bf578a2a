//! Curve point generation and projection engine for curve visualization.
//!
//! This crate samples algebraic curves (Weierstrass, Montgomery and Edwards
//! families, in affine and homogeneous form) over the real numbers and over
//! finite fields of prime order, and projects the resulting point sets onto
//! a sphere or a torus for 3D display. It is the computational core behind a
//! curve explorer service: the surrounding layer decodes wire requests into a
//! [`GenerateRequest`] and serializes the [`CurveResult`] it gets back.
//!
//! # Overview
//!
//! - Real mode samples the affine equation branch-consistently over a window
//!   and sweeps the homogeneous form along Z with X fixed at 1.
//! - Modulo mode exhaustively enumerates every curve point over Z/pZ.
//! - Both point sets are mapped onto display surfaces by the projection
//!   routines.
//!
//! # Example
//!
//! ```
//! use engine::{generate, CurveSpec, FieldMode, GenerateRequest, SampleDomain};
//!
//! let request = GenerateRequest {
//!     spec: CurveSpec::weierstrass(1.0, 1.0),
//!     mode: FieldMode::Modulo(7),
//!     domain: SampleDomain::default(),
//! };
//!
//! let result = generate(&request).expect("generation failed");
//! assert_eq!(result.points_2d.len(), result.torus.len());
//! ```
//!
//! All computation is visualization grade: `f64` over the reals, `i64` with
//! 128-bit intermediates modulo p. There is no group law and no cryptographic
//! guarantee anywhere in this crate.

mod curve;
mod engine;
mod errors;
mod finite;
mod homogeneous;
mod modmath;
mod point;
mod projection;
mod real;


pub use curve::{CurveFamily, CurveForm, CurveSpec, FieldMode};
pub use engine::{
    generate, generate_with, CancelToken, EngineOptions, GenerateRequest, SampleDomain,
};
pub use errors::EngineError;
pub use finite::enumerate_field_points;
pub use homogeneous::sweep_homogeneous;
pub use modmath::{is_prime, mod_inverse, mod_p, mod_sqrt_all};
pub use point::{AffinePoint, CurveResult, FieldPoint, HomogeneousPoint, ProjectedPoint};
pub use projection::{
    project_sphere, project_torus, projective_to_sphere, SPHERE_RADIUS, TORUS_MAJOR_RADIUS,
    TORUS_MINOR_RADIUS,
};
pub use real::{sample_affine, DEFAULT_EPSILON};
