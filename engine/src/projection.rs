//! Projections of computed point sets onto 3D display surfaces.
//!
//! These mappings exist purely for visualization; they carry no algebraic
//! meaning on the curve itself.

use std::f64::consts::TAU;

use crate::point::ProjectedPoint;

/// Radius of the display sphere.
pub const SPHERE_RADIUS: f64 = 3.0;
/// Major radius of the display torus.
pub const TORUS_MAJOR_RADIUS: f64 = 3.0;
/// Minor radius of the display torus.
pub const TORUS_MINOR_RADIUS: f64 = 1.0;

/// Inputs with a Euclidean norm below this have no usable direction.
const NORM_EPS: f64 = 1e-8;

/// Scale `(x, y, z)` onto the sphere of radius `r`.
///
/// Returns `None` when the input is within 1e-8 of the origin; the
/// degenerate point has no direction to project along and is excluded from
/// the output instead of becoming NaN.
pub fn projective_to_sphere(x: f64, y: f64, z: f64, r: f64) -> Option<ProjectedPoint> {
    let norm = (x * x + y * y + z * z).sqrt();
    if norm < NORM_EPS {
        return None;
    }
    let s = r / norm;
    Some(ProjectedPoint {
        x: x * s,
        y: y * s,
        z: z * s,
    })
}

/// Map a field point `(x, y)` mod p onto the torus.
///
/// The coordinates become angles `θ = 2πx/p`, `φ = 2πy/p`, fed into the
/// standard torus parametrization with major radius 3 and minor radius 1.
/// Z/pZ wraps around in both coordinates, which is exactly the topology a
/// torus displays without seams.
pub fn project_torus(x: i64, y: i64, p: i64) -> ProjectedPoint {
    let theta = TAU * x as f64 / p as f64;
    let phi = TAU * y as f64 / p as f64;

    let ring = TORUS_MAJOR_RADIUS + TORUS_MINOR_RADIUS * phi.cos();
    ProjectedPoint {
        x: ring * theta.cos(),
        y: ring * theta.sin(),
        z: TORUS_MINOR_RADIUS * phi.sin(),
    }
}

/// Map a field point `(x, y)` mod p onto the sphere by the classical
/// spherical parametrization, `θ = 2πx/p`, `φ = 2πy/p`.
///
/// Used when the source points are finite-field pairs rather than
/// already-projective triples.
pub fn project_sphere(x: i64, y: i64, p: i64) -> ProjectedPoint {
    let theta = TAU * x as f64 / p as f64;
    let phi = TAU * y as f64 / p as f64;

    ProjectedPoint {
        x: SPHERE_RADIUS * phi.sin() * theta.cos(),
        y: SPHERE_RADIUS * phi.sin() * theta.sin(),
        z: SPHERE_RADIUS * phi.cos(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(pt: ProjectedPoint) -> f64 {
        (pt.x * pt.x + pt.y * pt.y + pt.z * pt.z).sqrt()
    }

    #[test]
    fn test_projective_to_sphere_norm_is_r() {
        let inputs = [
            (1.0, 0.0, 0.0),
            (1.0, 2.0, 3.0),
            (-4.5, 0.25, -100.0),
            (0.001, -0.002, 0.003),
        ];
        for (x, y, z) in inputs {
            let pt = projective_to_sphere(x, y, z, SPHERE_RADIUS).unwrap();
            assert!((norm(pt) - SPHERE_RADIUS).abs() < 1e-9);
        }
        // Custom radius is honored too.
        let pt = projective_to_sphere(1.0, 1.0, 1.0, 7.0).unwrap();
        assert!((norm(pt) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_projective_to_sphere_preserves_direction() {
        let pt = projective_to_sphere(2.0, 0.0, 0.0, SPHERE_RADIUS).unwrap();
        assert!((pt.x - SPHERE_RADIUS).abs() < 1e-12);
        assert_eq!(pt.y, 0.0);
        assert_eq!(pt.z, 0.0);
    }

    #[test]
    fn test_projective_to_sphere_rejects_origin() {
        assert!(projective_to_sphere(0.0, 0.0, 0.0, SPHERE_RADIUS).is_none());
        assert!(projective_to_sphere(1e-9, -1e-9, 1e-9, SPHERE_RADIUS).is_none());
    }

    #[test]
    fn test_torus_points_lie_on_the_torus() {
        let p = 97;
        for (x, y) in [(0, 0), (1, 96), (48, 13), (96, 96), (20, 50)] {
            let pt = project_torus(x, y, p);
            let ring = (pt.x * pt.x + pt.y * pt.y).sqrt() - TORUS_MAJOR_RADIUS;
            let err = ring * ring + pt.z * pt.z - TORUS_MINOR_RADIUS * TORUS_MINOR_RADIUS;
            assert!(err.abs() < 1e-9, "off-torus at ({x}, {y})");
        }
    }

    #[test]
    fn test_torus_wraps_around_the_modulus() {
        let p = 31;
        let a = project_torus(0, 5, p);
        let b = project_torus(p, 5, p);
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
        assert!((a.z - b.z).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_parametrization_norm() {
        let p = 23;
        for x in 0..p {
            for y in 0..p {
                let pt = project_sphere(x, y, p);
                assert!((norm(pt) - SPHERE_RADIUS).abs() < 1e-9);
            }
        }
    }
}
