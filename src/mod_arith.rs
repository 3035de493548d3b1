use crate::error::{Error, Result};

pub const MOD: u64 = 1_000_000_007;
pub const INF: i64 = 1_000_000_000_000_000_000;

#[inline]
pub(crate) fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    (a as u128 * b as u128 % modulus as u128) as u64
}

/// `base^exp mod modulus` by square-and-multiply.
///
/// Panics if `modulus == 0`; see [`try_mod_pow`].
pub fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

pub fn try_mod_pow(base: u64, exp: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(Error::ZeroModulus);
    }
    Ok(mod_pow(base, exp, modulus))
}

/// Inverse by Fermat's little theorem. Only meaningful for prime `modulus`.
pub fn mod_inv(n: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(Error::ZeroModulus);
    }
    if n % modulus == 0 {
        return Err(Error::NotInvertible { value: n, modulus });
    }
    Ok(mod_pow(n, modulus - 2, modulus))
}

fn checked_pow(mut base: u64, mut exp: u64) -> Option<u64> {
    let mut result: u64 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exp >>= 1;
        // squaring past the last bit would report a spurious overflow
        if exp > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(result)
}

/// `base^exp`, reduced by `modulus` if one is given.
///
/// Returns `None` on overflow of the unreduced power, or for `Some(0)`.
pub fn power(base: u64, exp: u64, modulus: Option<u64>) -> Option<u64> {
    match modulus {
        Some(0) => None,
        Some(m) => Some(mod_pow(base, exp, m)),
        None => checked_pow(base, exp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pow_naive(base: u64, exp: u64, modulus: u64) -> u64 {
        let mut acc = 1 % modulus;
        for _ in 0..exp {
            acc = acc * (base % modulus) % modulus;
        }
        acc
    }

    #[test]
    fn small_powers() {
        assert_eq!(mod_pow(2, 10, MOD), 1024);
        assert_eq!(mod_pow(3, 0, MOD), 1);
        assert_eq!(mod_pow(0, 0, MOD), 1);
        assert_eq!(mod_pow(5, 3, 1), 0);
        assert_eq!(mod_pow(2, 62, u64::MAX), 1 << 62);
    }

    #[test]
    fn brute() {
        for m in 1..40 {
            for b in 0..40 {
                for e in 0..20 {
                    assert_eq!(mod_pow(b, e, m), pow_naive(b, e, m), "{:?}", (b, e, m));
                }
            }
        }
    }

    #[test]
    fn zero_modulus() {
        assert!(matches!(try_mod_pow(2, 3, 0), Err(Error::ZeroModulus)));
        assert!(matches!(mod_inv(2, 0), Err(Error::ZeroModulus)));
        assert_eq!(power(2, 3, Some(0)), None);
    }

    #[test]
    fn inverse() {
        assert_eq!(mod_inv(2, MOD).unwrap(), 500_000_004);
        assert!(matches!(
            mod_inv(2 * MOD, MOD),
            Err(Error::NotInvertible { value, modulus: MOD }) if value == 2 * MOD
        ));
        for a in 1..7 {
            assert_eq!(a * mod_inv(a, 7).unwrap() % 7, 1);
        }
    }

    #[test]
    fn unreduced_power() {
        assert_eq!(power(2, 10, None), Some(1024));
        assert_eq!(power(2, 63, None), Some(1 << 63));
        assert_eq!(power(2, 64, None), None);
        assert_eq!(power(0, 100, None), Some(0));
        assert_eq!(power(1, u64::MAX, None), Some(1));
        assert_eq!(power(10, 5, Some(7)), Some(100_000 % 7));
    }

    proptest! {
        #[test]
        fn exponent_sum(a in 0..MOD, b in 0u64..1 << 40, c in 0u64..1 << 40) {
            let lhs = mod_pow(a, b + c, MOD);
            let rhs = mod_pow(a, b, MOD) * mod_pow(a, c, MOD) % MOD;
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn fermat(a in 1..MOD) {
            prop_assert_eq!(mod_pow(a, MOD - 1, MOD), 1);
            prop_assert_eq!(a * mod_inv(a, MOD).unwrap() % MOD, 1);
        }

        #[test]
        fn checked_matches_std(base in 0u64..1000, exp in 0u32..70) {
            prop_assert_eq!(power(base, exp as u64, None), base.checked_pow(exp));
        }
    }
}
