//! Exhaustive enumeration of curve points over Z/pZ.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::curve::CurveSpec;
use crate::engine::CancelToken;
use crate::errors::EngineError;
use crate::modmath::mod_sqrt_all;
use crate::point::FieldPoint;

/// Enumerate every `(x, y)` in `[0, p)²` satisfying the curve mod p,
/// ascending in x and then in y.
///
/// This walks all p columns and runs the O(p) root scan on each, so the
/// total cost is O(p²). The token is checked once per column; a caller-side
/// deadline can trip it from another thread to abandon a large modulus
/// mid-flight. With the `parallel` feature the columns are distributed over
/// rayon while the output order is preserved.
pub fn enumerate_field_points(
    curve: &CurveSpec,
    p: i64,
    cancel: &CancelToken,
) -> Result<Vec<FieldPoint>, EngineError> {
    if p < 2 {
        return Err(EngineError::InvalidDomain(format!(
            "modulus must be >= 2, got {p}"
        )));
    }

    let column = |x: i64| -> Result<Vec<FieldPoint>, EngineError> {
        if cancel.is_cancelled() {
            return Err(EngineError::Cancelled);
        }
        // A non-invertible Edwards denominator means no points here.
        let Some(y2) = curve.eval_affine_mod(x, p) else {
            return Ok(Vec::new());
        };
        let roots = mod_sqrt_all(y2, p)?;
        Ok(roots.into_iter().map(|y| FieldPoint { x, y }).collect())
    };

    #[cfg(feature = "parallel")]
    let columns = (0..p)
        .into_par_iter()
        .map(column)
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let columns = (0..p).map(column).collect::<Result<Vec<_>, _>>()?;

    let points: Vec<FieldPoint> = columns.into_iter().flatten().collect();
    debug!(
        "enumerated {} points of {} mod {}",
        points.len(),
        curve.family,
        p
    );
    Ok(points)
}
