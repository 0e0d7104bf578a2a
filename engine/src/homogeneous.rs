//! Projective sampling: X fixed at 1, Z swept across the window.

use log::debug;

use crate::curve::{CurveFamily, CurveSpec};
use crate::point::HomogeneousPoint;

/// Z values this close to 0 make `Y² = F / Z` meaningless and are skipped.
const Z_EPS: f64 = 1e-8;

/// Edwards denominators below this magnitude are singular; the sample is
/// dropped rather than letting NaN or infinity into the output.
const EDWARDS_DENOM_EPS: f64 = 1e-8;

/// Sweep Z over `[x_min, x_max]` with X = 1 and solve the homogeneous form
/// for Y at `resolution + 1` uniform samples.
///
/// Each viable Z yields `(1, +Y, Z)` and, when Y is nonzero, `(1, -Y, Z)`.
/// Samples are dropped when `Y²` comes out negative, when `|Z| < 1e-8`, or
/// (Edwards) when `Z² - d·X²` is near zero. The output never contains NaN
/// or infinity.
pub fn sweep_homogeneous(
    curve: &CurveSpec,
    x_min: f64,
    x_max: f64,
    resolution: u32,
) -> Vec<HomogeneousPoint> {
    debug_assert!(resolution >= 1);

    let dx = (x_max - x_min) / resolution as f64;
    let x = 1.0;
    let mut points = Vec::new();

    for i in 0..=resolution {
        let z = x_min + i as f64 * dx;
        if z.abs() < Z_EPS {
            continue;
        }

        let f = match curve.family {
            // F = X³ + aXZ² + bZ³
            CurveFamily::Weierstrass => x * x * x + curve.a * x * z * z + curve.b * z * z * z,
            // F = X³ + aX²Z + bXZ²
            CurveFamily::Montgomery => x * x * x + curve.a * x * x * z + curve.b * x * z * z,
            // F = (Z⁴ - X²Z²) / (Z² - dX²)
            CurveFamily::Edwards => {
                let den = z * z - curve.d * x * x;
                if den.abs() < EDWARDS_DENOM_EPS {
                    continue;
                }
                (z * z * z * z - x * x * z * z) / den
            }
        };

        let y2 = f / z;
        if y2 >= 0.0 {
            let y = y2.sqrt();
            points.push(HomogeneousPoint { x, y, z });
            if y != 0.0 {
                points.push(HomogeneousPoint { x, y: -y, z });
            }
        }
    }

    debug!(
        "homogeneous sweep of {} produced {} points",
        curve.family,
        points.len()
    );
    points
}
