//! Modular arithmetic over small moduli.
//!
//! The modulus is a plain `i64` and intermediates are widened to 128 bits so
//! products never overflow. Everything here is visualization grade: the
//! square root search is an exhaustive O(p) scan rather than Tonelli-Shanks,
//! because the callers need every root, not an arbitrary representative.

use crate::errors::EngineError;

/// Normalize `n` into `[0, p)` regardless of sign.
///
/// `p` must be at least 1; the samplers validate the modulus before any
/// arithmetic runs.
#[inline]
pub fn mod_p(n: i64, p: i64) -> i64 {
    debug_assert!(p >= 1, "modulus must be positive");
    ((n % p) + p) % p
}

/// `a * b mod p` without intermediate overflow.
#[inline]
pub(crate) fn mul_mod(a: i64, b: i64, p: i64) -> i64 {
    (a as i128 * b as i128).rem_euclid(p as i128) as i64
}

/// Modular inverse of `a` modulo `p` by the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, p) != 1`; `p` is not required to be prime,
/// so non-invertible residues are an expected outcome rather than an error.
pub fn mod_inverse(a: i64, p: i64) -> Option<i64> {
    let a = mod_p(a, p);
    if a == 0 {
        return None;
    }

    let (mut t, mut new_t) = (0i64, 1i64);
    let (mut r, mut new_r) = (p, a);

    while new_r != 0 {
        let q = r / new_r;
        (t, new_t) = (new_t, t - q * new_t);
        (r, new_r) = (new_r, r - q * new_r);
    }

    if r > 1 {
        return None;
    }
    Some(mod_p(t, p))
}

/// Every `y` in `[0, p)` with `y * y ≡ n (mod p)`, in ascending order.
///
/// Exhaustive scan, O(p). Completeness is the contract here: the finite
/// field sampler relies on receiving all roots of a column, so there is no
/// early exit after the first match.
pub fn mod_sqrt_all(n: i64, p: i64) -> Result<Vec<i64>, EngineError> {
    if p < 2 {
        return Err(EngineError::ArithmeticDomain(format!(
            "modular square root requires p >= 2, got {p}"
        )));
    }

    let n = mod_p(n, p);
    let mut roots = Vec::new();
    for y in 0..p {
        if mul_mod(y, y, p) == n {
            roots.push(y);
        }
    }
    Ok(roots)
}

/// Trial-division primality check, O(sqrt p).
///
/// The engine itself never requires a prime modulus; this is exposed for
/// callers that want genuine field semantics before they submit a request.
pub fn is_prime(p: i64) -> bool {
    if p < 2 {
        return false;
    }
    let mut i = 2i64;
    while i <= p / i {
        if p % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_p_normalizes_negatives() {
        assert_eq!(mod_p(-1, 7), 6);
        assert_eq!(mod_p(-14, 7), 0);
        assert_eq!(mod_p(13, 7), 6);
        assert_eq!(mod_p(0, 7), 0);
    }

    #[test]
    fn test_mod_inverse_known_value() {
        assert_eq!(mod_inverse(3, 7), Some(5));
    }

    #[test]
    fn test_mod_inverse_round_trips() {
        for p in [7i64, 13, 97] {
            for a in 1..p {
                let inv = mod_inverse(a, p).expect("prime modulus, inverse must exist");
                assert_eq!(mul_mod(a, inv, p), 1, "a = {a}, p = {p}");
            }
        }
    }

    #[test]
    fn test_mod_inverse_rejects_non_coprime() {
        assert_eq!(mod_inverse(0, 7), None);
        assert_eq!(mod_inverse(6, 9), None);
        assert_eq!(mod_inverse(4, 8), None);
    }

    #[test]
    fn test_mod_sqrt_all_known_roots() {
        assert_eq!(mod_sqrt_all(4, 7).unwrap(), vec![2, 5]);
        assert_eq!(mod_sqrt_all(0, 7).unwrap(), vec![0]);
        assert_eq!(mod_sqrt_all(3, 7).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_mod_sqrt_all_is_complete() {
        // Cross-check against a brute force pass over every residue.
        let p = 11;
        for n in 0..p {
            let roots = mod_sqrt_all(n, p).unwrap();
            for y in 0..p {
                let is_root = mul_mod(y, y, p) == n;
                assert_eq!(roots.contains(&y), is_root, "n = {n}, y = {y}");
            }
            assert!(roots.windows(2).all(|w| w[0] < w[1]), "roots must ascend");
        }
    }

    #[test]
    fn test_mod_sqrt_all_rejects_tiny_modulus() {
        assert!(matches!(
            mod_sqrt_all(4, 1),
            Err(EngineError::ArithmeticDomain(_))
        ));
        assert!(matches!(
            mod_sqrt_all(4, 0),
            Err(EngineError::ArithmeticDomain(_))
        ));
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(97));
        assert!(!is_prime(100));
        assert!(is_prime(7919));
    }
}
