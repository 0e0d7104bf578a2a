//! Branch-consistent sampling of affine curves over the reals.

use log::debug;

use crate::curve::CurveSpec;
use crate::point::AffinePoint;

/// Default snap threshold for near-axis y values.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Sample the affine curve at `resolution + 1` uniform x values over
/// `[x_min, x_max]`.
///
/// Columns where `y²` is negative (or Edwards-singular) produce no points.
/// Roots with `|y| < epsilon` snap to exactly 0 so the two branches meet
/// instead of leaving a near-axis gap.
///
/// Ordering contract: the output is one continuous contour, the upper
/// branch in ascending x followed by the lower branch in descending x.
/// Renderers draw the sequence as a single polyline; consumers needing a
/// different order may re-sort, but must not assume the output is unordered.
///
/// `resolution` must be at least 1; the orchestrator validates the domain
/// before calling in here.
pub fn sample_affine(
    curve: &CurveSpec,
    x_min: f64,
    x_max: f64,
    resolution: u32,
    epsilon: f64,
) -> Vec<AffinePoint> {
    debug_assert!(resolution >= 1);
    debug_assert!(x_min < x_max);

    let dx = (x_max - x_min) / resolution as f64;
    let mut upper = Vec::new();
    let mut lower = Vec::new();

    for i in 0..=resolution {
        let x = x_min + i as f64 * dx;
        let y2 = curve.eval_affine(x);
        if y2 >= 0.0 {
            let mut y = y2.sqrt();
            if y < epsilon {
                y = 0.0;
            }
            upper.push(AffinePoint { x, y });
            // Avoid emitting -0.0 where the branches touch the axis.
            let neg = if y == 0.0 { 0.0 } else { -y };
            lower.push(AffinePoint { x, y: neg });
        }
    }

    lower.reverse();
    upper.extend(lower);
    debug!(
        "affine sampling of {} produced {} points",
        curve.family,
        upper.len()
    );
    upper
}
