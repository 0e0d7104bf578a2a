//! Algebraic curve models: three families, affine and homogeneous forms.
//!
//! Affine evaluators return `y²` as a function of x; homogeneous evaluators
//! return the residual `lhs - rhs` of the implicit form, which the sweep
//! sampler compares against zero. Every evaluator exists in a real (`f64`)
//! and a mod-p (`i64`) variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::modmath::{mod_inverse, mod_p, mul_mod};

/// Real Edwards denominators below this magnitude are treated as singular.
const EDWARDS_DENOM_EPS: f64 = 1e-14;

/// Sentinel returned by the real Edwards evaluator at a near-singular x.
///
/// Negative by construction, so the samplers reject the column the same way
/// they reject a negative radicand.
pub(crate) const EDWARDS_SINGULAR: f64 = -1.0;

/// The three supported curve families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveFamily {
    /// `y² = x³ + a·x + b`
    Weierstrass,
    /// `y² = x³ + a·x² + b·x`
    Montgomery,
    /// `x² + y² = 1 + d·x²·y²`
    Edwards,
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveFamily::Weierstrass => write!(f, "weierstrass"),
            CurveFamily::Montgomery => write!(f, "montgomery"),
            CurveFamily::Edwards => write!(f, "edwards"),
        }
    }
}

impl FromStr for CurveFamily {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weierstrass" => Ok(CurveFamily::Weierstrass),
            "montgomery" => Ok(CurveFamily::Montgomery),
            "edwards" => Ok(CurveFamily::Edwards),
            other => Err(EngineError::UnknownCurveType(other.to_string())),
        }
    }
}

/// Affine or homogeneous rendition of a family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveForm {
    Affine,
    Homogeneous,
}

/// Field over which the curve is sampled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", content = "p", rename_all = "lowercase")]
pub enum FieldMode {
    /// Sample over ℝ on a bounded window.
    Real,
    /// Enumerate over Z/pZ. The modulus must be at least 2; it need not be
    /// prime, though non-prime moduli give a ring, not a field.
    Modulo(i64),
}

/// Immutable description of one curve instance.
///
/// `a` and `b` parametrize the Weierstrass and Montgomery families, `d` the
/// Edwards family; the unused coefficients are ignored. Non-singularity
/// (`4a³ + 27b² ≠ 0` for Weierstrass, `d ≠ 1` for Edwards) is the caller's
/// concern: the engine degrades to fewer or zero points on violating input
/// instead of failing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub family: CurveFamily,
    pub form: CurveForm,
    #[serde(default)]
    pub a: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default)]
    pub d: f64,
}

impl CurveSpec {
    /// Affine Weierstrass curve `y² = x³ + a·x + b`.
    pub fn weierstrass(a: f64, b: f64) -> Self {
        CurveSpec {
            family: CurveFamily::Weierstrass,
            form: CurveForm::Affine,
            a,
            b,
            d: 0.0,
        }
    }

    /// Affine Montgomery curve `y² = x³ + a·x² + b·x`.
    pub fn montgomery(a: f64, b: f64) -> Self {
        CurveSpec {
            family: CurveFamily::Montgomery,
            form: CurveForm::Affine,
            a,
            b,
            d: 0.0,
        }
    }

    /// Affine Edwards curve `x² + y² = 1 + d·x²·y²`.
    pub fn edwards(d: f64) -> Self {
        CurveSpec {
            family: CurveFamily::Edwards,
            form: CurveForm::Affine,
            a: 0.0,
            b: 0.0,
            d,
        }
    }

    /// Copy of this spec in the given form.
    pub fn with_form(self, form: CurveForm) -> Self {
        CurveSpec { form, ..self }
    }

    /// Build a spec from the wire spelling used by the explorer API,
    /// e.g. `"montgomery"` or `"weierstrass_homogeneous"`.
    pub fn from_wire(curve_type: &str, a: f64, b: f64, d: f64) -> Result<Self, EngineError> {
        let (name, form) = match curve_type.strip_suffix("_homogeneous") {
            Some(base) => (base, CurveForm::Homogeneous),
            None => (curve_type, CurveForm::Affine),
        };
        let family = name
            .parse::<CurveFamily>()
            .map_err(|_| EngineError::UnknownCurveType(curve_type.to_string()))?;
        Ok(CurveSpec {
            family,
            form,
            a,
            b,
            d,
        })
    }

    /// Evaluate `y²` as a function of x for the affine form over ℝ.
    ///
    /// Edwards returns the `-1.0` sentinel when `|1 - d·x²|` drops below
    /// 1e-14, which the samplers treat like any other negative radicand.
    pub fn eval_affine(&self, x: f64) -> f64 {
        match self.family {
            CurveFamily::Weierstrass => x * x * x + self.a * x + self.b,
            CurveFamily::Montgomery => x * x * x + self.a * x * x + self.b * x,
            CurveFamily::Edwards => {
                let den = 1.0 - self.d * x * x;
                if den.abs() < EDWARDS_DENOM_EPS {
                    EDWARDS_SINGULAR
                } else {
                    (1.0 - x * x) / den
                }
            }
        }
    }

    /// Evaluate `y² mod p` for the affine form, coefficients rounded to
    /// integers and reduced.
    ///
    /// Edwards division is true field division through [`mod_inverse`];
    /// `None` marks an x whose denominator is not invertible mod p, meaning
    /// the column contributes no points.
    pub fn eval_affine_mod(&self, x: i64, p: i64) -> Option<i64> {
        let x = mod_p(x, p);
        match self.family {
            CurveFamily::Weierstrass => {
                let a = mod_p(self.a.round() as i64, p);
                let b = mod_p(self.b.round() as i64, p);
                let x3 = mul_mod(mul_mod(x, x, p), x, p);
                let t = mod_p(x3 + mul_mod(a, x, p), p);
                Some(mod_p(t + b, p))
            }
            CurveFamily::Montgomery => {
                let a = mod_p(self.a.round() as i64, p);
                let b = mod_p(self.b.round() as i64, p);
                let x2 = mul_mod(x, x, p);
                let x3 = mul_mod(x2, x, p);
                let t = mod_p(x3 + mul_mod(a, x2, p), p);
                Some(mod_p(t + mul_mod(b, x, p), p))
            }
            CurveFamily::Edwards => {
                let d = mod_p(self.d.round() as i64, p);
                let x2 = mul_mod(x, x, p);
                let num = mod_p(1 - x2, p);
                let den = mod_p(1 - mul_mod(d, x2, p), p);
                let inv = mod_inverse(den, p)?;
                Some(mul_mod(num, inv, p))
            }
        }
    }

    /// Residual `lhs - rhs` of the homogeneous form at (x, y, z) over ℝ.
    ///
    /// Zero means the triple lies on the curve. The sweep sampler solves the
    /// form for Y directly, so this is mainly a membership check.
    pub fn residual(&self, x: f64, y: f64, z: f64) -> f64 {
        match self.family {
            // Y²Z = X³ + aXZ² + bZ³
            CurveFamily::Weierstrass => {
                y * y * z - (x * x * x + self.a * x * z * z + self.b * z * z * z)
            }
            // Y²Z = X³ + aX²Z + bXZ²
            CurveFamily::Montgomery => {
                y * y * z - (x * x * x + self.a * x * x * z + self.b * x * z * z)
            }
            // (X² + Y²)Z² = Z⁴ + dX²Y²
            CurveFamily::Edwards => {
                (x * x + y * y) * z * z - (z * z * z * z + self.d * x * x * y * y)
            }
        }
    }

    /// Residual of the homogeneous form reduced mod p.
    pub fn residual_mod(&self, x: i64, y: i64, z: i64, p: i64) -> i64 {
        let (x, y, z) = (mod_p(x, p), mod_p(y, p), mod_p(z, p));
        let x2 = mul_mod(x, x, p);
        let y2 = mul_mod(y, y, p);
        let z2 = mul_mod(z, z, p);
        match self.family {
            CurveFamily::Weierstrass => {
                let a = mod_p(self.a.round() as i64, p);
                let b = mod_p(self.b.round() as i64, p);
                let lhs = mul_mod(y2, z, p);
                let rhs = mod_p(
                    mod_p(mul_mod(x2, x, p) + mul_mod(a, mul_mod(x, z2, p), p), p)
                        + mul_mod(b, mul_mod(z2, z, p), p),
                    p,
                );
                mod_p(lhs - rhs, p)
            }
            CurveFamily::Montgomery => {
                let a = mod_p(self.a.round() as i64, p);
                let b = mod_p(self.b.round() as i64, p);
                let lhs = mul_mod(y2, z, p);
                let rhs = mod_p(
                    mod_p(mul_mod(x2, x, p) + mul_mod(a, mul_mod(x2, z, p), p), p)
                        + mul_mod(b, mul_mod(x, z2, p), p),
                    p,
                );
                mod_p(lhs - rhs, p)
            }
            CurveFamily::Edwards => {
                let d = mod_p(self.d.round() as i64, p);
                let lhs = mul_mod(mod_p(x2 + y2, p), z2, p);
                let rhs = mod_p(mul_mod(z2, z2, p) + mul_mod(d, mul_mod(x2, y2, p), p), p);
                mod_p(lhs - rhs, p)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weierstrass_eval() {
        let c = CurveSpec::weierstrass(1.0, 1.0);
        assert_eq!(c.eval_affine(0.0), 1.0);
        assert_eq!(c.eval_affine(2.0), 11.0);
        assert_eq!(c.eval_affine(-2.0), -9.0);
    }

    #[test]
    fn test_montgomery_eval() {
        let c = CurveSpec::montgomery(2.0, 3.0);
        assert_eq!(c.eval_affine(0.0), 0.0);
        // 1 + 2 + 3
        assert_eq!(c.eval_affine(1.0), 6.0);
    }

    #[test]
    fn test_edwards_eval_and_singularity() {
        let c = CurveSpec::edwards(0.0);
        // d = 0 degenerates to the unit circle: y² = 1 - x².
        assert_eq!(c.eval_affine(0.0), 1.0);
        assert_eq!(c.eval_affine(1.0), 0.0);

        // d = 1 is singular at x = 1: sentinel, not NaN or infinity.
        let singular = CurveSpec::edwards(1.0);
        assert_eq!(singular.eval_affine(1.0), EDWARDS_SINGULAR);
    }

    #[test]
    fn test_eval_affine_mod_reference_values() {
        let c = CurveSpec::weierstrass(1.0, 1.0);
        // x³ + x + 1 mod 7 for x = 0..7
        let expected = [1, 3, 4, 3, 6, 5, 6];
        for (x, want) in expected.iter().enumerate() {
            assert_eq!(c.eval_affine_mod(x as i64, 7), Some(*want));
        }
    }

    #[test]
    fn test_eval_affine_mod_edwards_division() {
        // y² = (1 - x²)/(1 - 2x²) over Z/7Z.
        let c = CurveSpec::edwards(2.0);
        // x = 2: num = 1 - 4 = -3 ≡ 4, den = 1 - 8 = -7 ≡ 0 -> no inverse.
        assert_eq!(c.eval_affine_mod(2, 7), None);
        // x = 1: num = 0, den = -1 ≡ 6, 6⁻¹ = 6, value 0.
        assert_eq!(c.eval_affine_mod(1, 7), Some(0));
        // x = 3: num = -8 ≡ 6, den = -17 ≡ 4, 4⁻¹ = 2, 6 * 2 = 12 ≡ 5.
        assert_eq!(c.eval_affine_mod(3, 7), Some(5));
    }

    #[test]
    fn test_residual_vanishes_on_curve_points() {
        // y² = x³ - x has (1, 0) and (0, 0); homogenize with z = 1.
        let c = CurveSpec::weierstrass(-1.0, 0.0).with_form(CurveForm::Homogeneous);
        assert_eq!(c.residual(1.0, 0.0, 1.0), 0.0);
        assert_eq!(c.residual(0.0, 0.0, 1.0), 0.0);
        assert_ne!(c.residual(2.0, 1.0, 1.0), 0.0);

        // Scaling a projective point must not change membership.
        let m = CurveSpec::montgomery(1.0, 1.0).with_form(CurveForm::Homogeneous);
        // y² = x³ + x² + x at x = 1 gives y = sqrt(3).
        let y = 3.0f64.sqrt();
        assert!(m.residual(1.0, y, 1.0).abs() < 1e-12);
        assert!(m.residual(2.0, 2.0 * y, 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_residual_mod_matches_affine_points() {
        let c = CurveSpec::weierstrass(1.0, 1.0);
        // (0, 1) lies on y² = x³ + x + 1 mod 7.
        assert_eq!(c.residual_mod(0, 1, 1, 7), 0);
        assert_eq!(c.residual_mod(2, 2, 1, 7), 0);
        assert_ne!(c.residual_mod(1, 1, 1, 7), 0);
    }

    #[test]
    fn test_from_wire_spellings() {
        let spec = CurveSpec::from_wire("weierstrass", 1.0, 2.0, 0.0).unwrap();
        assert_eq!(spec.family, CurveFamily::Weierstrass);
        assert_eq!(spec.form, CurveForm::Affine);

        let spec = CurveSpec::from_wire("montgomery_homogeneous", 1.0, 2.0, 0.0).unwrap();
        assert_eq!(spec.family, CurveFamily::Montgomery);
        assert_eq!(spec.form, CurveForm::Homogeneous);

        let err = CurveSpec::from_wire("hessian", 0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err, EngineError::UnknownCurveType("hessian".to_string()));
    }

    #[test]
    fn test_family_display_round_trips() {
        for family in [
            CurveFamily::Weierstrass,
            CurveFamily::Montgomery,
            CurveFamily::Edwards,
        ] {
            assert_eq!(family.to_string().parse::<CurveFamily>().unwrap(), family);
        }
    }
}
