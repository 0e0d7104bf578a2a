//! Request types and the generation orchestrator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::curve::{CurveFamily, CurveForm, CurveSpec, FieldMode};
use crate::errors::EngineError;
use crate::finite::enumerate_field_points;
use crate::homogeneous::sweep_homogeneous;
use crate::point::{AffinePoint, CurveResult, ProjectedPoint};
use crate::projection::{project_sphere, project_torus, projective_to_sphere, SPHERE_RADIUS};
use crate::real::{sample_affine, DEFAULT_EPSILON};

/// Sampling window for Real-mode requests.
///
/// Modulo-mode requests ignore the window; their extent is the modulus
/// carried by [`FieldMode::Modulo`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleDomain {
    #[serde(rename = "xMin")]
    pub x_min: f64,
    #[serde(rename = "xMax")]
    pub x_max: f64,
    pub resolution: u32,
}

impl Default for SampleDomain {
    /// The window the explorer UI ships with.
    fn default() -> Self {
        SampleDomain {
            x_min: -5.0,
            x_max: 5.0,
            resolution: 300,
        }
    }
}

/// One complete generation request: the engine's entire input surface.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub spec: CurveSpec,
    pub mode: FieldMode,
    #[serde(default)]
    pub domain: SampleDomain,
}

/// Tuning knobs; `Default` matches the service's stock behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineOptions {
    /// Snap threshold for near-axis y values in real sampling.
    pub epsilon: f64,
    /// Run the homogeneous sweep for Edwards curves in real mode.
    ///
    /// Off by default: the quartic Edwards form does not reduce to a clean
    /// Y² cubic the way Weierstrass and Montgomery do, and the explorer
    /// frontend historically drew Edwards curves from the affine samples
    /// alone. Kept as a switch for callers that want the sweep anyway.
    pub edwards_homogeneous: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            epsilon: DEFAULT_EPSILON,
            edwards_homogeneous: false,
        }
    }
}

/// Cooperative cancellation handle for long enumerations.
///
/// Clones share one flag: keep a clone on the caller side and trip it from
/// another thread when a deadline passes. The finite field sampler checks
/// the flag between columns and bails out with [`EngineError::Cancelled`].
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; visible to every clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Generate the full visualization bundle for one request with default
/// options and no cancellation.
pub fn generate(request: &GenerateRequest) -> Result<CurveResult, EngineError> {
    generate_with(request, &EngineOptions::default(), &CancelToken::new())
}

/// Generate the full visualization bundle for one request.
///
/// Pure request-to-result: nothing survives the call, so concurrent
/// invocations need no coordination. The domain is validated before any
/// sampling starts; local near-singularities inside the samplers degrade to
/// skipped samples, never to NaN or infinity in the output.
pub fn generate_with(
    request: &GenerateRequest,
    options: &EngineOptions,
    cancel: &CancelToken,
) -> Result<CurveResult, EngineError> {
    validate(request)?;
    warn_on_singular_input(&request.spec);

    let result = match request.mode {
        FieldMode::Real => generate_real(request, options),
        FieldMode::Modulo(p) => generate_modulo(request, p, cancel)?,
    };

    debug!(
        "{} in {:?} mode: {} affine, {} homogeneous, {} torus, {} sphere points",
        request.spec.family,
        request.mode,
        result.points_2d.len(),
        result.homogeneous_points_2d.len(),
        result.torus.len(),
        result.sphere.len()
    );
    Ok(result)
}

fn generate_real(request: &GenerateRequest, options: &EngineOptions) -> CurveResult {
    let domain = request.domain;
    let affine = request.spec.with_form(CurveForm::Affine);
    let points_2d = sample_affine(
        &affine,
        domain.x_min,
        domain.x_max,
        domain.resolution,
        options.epsilon,
    );

    let homogeneous_points_2d =
        if request.spec.family != CurveFamily::Edwards || options.edwards_homogeneous {
            sweep_homogeneous(
                &request.spec.with_form(CurveForm::Homogeneous),
                domain.x_min,
                domain.x_max,
                domain.resolution,
            )
        } else {
            Vec::new()
        };

    // Each sample goes up twice: as (x, y, 1) and as its antipodal
    // reflection, so both hemispheres carry the curve.
    let mut sphere = Vec::new();
    for pt in &points_2d {
        push_sphere(&mut sphere, pt.x, pt.y, 1.0);
        push_sphere(&mut sphere, -pt.x, -pt.y, -1.0);
    }
    for pt in &homogeneous_points_2d {
        push_sphere(&mut sphere, pt.x, pt.y, pt.z);
        push_sphere(&mut sphere, -pt.x, -pt.y, -pt.z);
    }

    CurveResult {
        points_2d,
        homogeneous_points_2d,
        torus: Vec::new(),
        sphere,
    }
}

fn generate_modulo(
    request: &GenerateRequest,
    p: i64,
    cancel: &CancelToken,
) -> Result<CurveResult, EngineError> {
    let affine = request.spec.with_form(CurveForm::Affine);
    let field_points = enumerate_field_points(&affine, p, cancel)?;

    let torus = field_points
        .iter()
        .map(|pt| project_torus(pt.x, pt.y, p))
        .collect();
    let sphere = field_points
        .iter()
        .map(|pt| project_sphere(pt.x, pt.y, p))
        .collect();
    // p is a bounded modulus, so the widened coordinates stay exact.
    let points_2d = field_points
        .iter()
        .map(|pt| AffinePoint {
            x: pt.x as f64,
            y: pt.y as f64,
        })
        .collect();

    Ok(CurveResult {
        points_2d,
        homogeneous_points_2d: Vec::new(),
        torus,
        sphere,
    })
}

fn push_sphere(out: &mut Vec<ProjectedPoint>, x: f64, y: f64, z: f64) {
    if let Some(pt) = projective_to_sphere(x, y, z, SPHERE_RADIUS) {
        out.push(pt);
    }
}

fn validate(request: &GenerateRequest) -> Result<(), EngineError> {
    match request.mode {
        FieldMode::Real => {
            let d = request.domain;
            if d.resolution == 0 {
                return Err(EngineError::InvalidDomain(
                    "resolution must be at least 1".to_string(),
                ));
            }
            if !d.x_min.is_finite() || !d.x_max.is_finite() {
                return Err(EngineError::InvalidDomain(format!(
                    "non-finite sample window [{}, {}]",
                    d.x_min, d.x_max
                )));
            }
            if d.x_min >= d.x_max {
                return Err(EngineError::InvalidDomain(format!(
                    "empty sample window [{}, {}]",
                    d.x_min, d.x_max
                )));
            }
        }
        FieldMode::Modulo(p) => {
            if p < 2 {
                return Err(EngineError::InvalidDomain(format!(
                    "modulus must be >= 2, got {p}"
                )));
            }
        }
    }
    Ok(())
}

/// Singular coefficients are the upstream validator's job; log them here so
/// an empty-looking plot is diagnosable, then continue.
fn warn_on_singular_input(spec: &CurveSpec) {
    match spec.family {
        CurveFamily::Weierstrass => {
            let discriminant = 4.0 * spec.a.powi(3) + 27.0 * spec.b.powi(2);
            if discriminant == 0.0 {
                warn!("singular weierstrass curve (4a³ + 27b² = 0), a = {}, b = {}", spec.a, spec.b);
            }
        }
        CurveFamily::Edwards => {
            if spec.d == 1.0 {
                warn!("singular edwards curve (d = 1)");
            }
        }
        CurveFamily::Montgomery => {}
    }
}
