use crate::mod_arith::{mod_pow, mul_mod};

/// Trial division. `0` and `1` are not prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Deterministic Miller-Rabin over the whole `u64` range.
pub fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let r = (n - 1).trailing_zeros();
    let d = (n - 1) >> r;
    'outer: for a in [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37] {
        if n == a {
            return true;
        }
        if n % a == 0 {
            return false;
        }
        let mut c = mod_pow(a, d, n);
        if c == 1 || c == n - 1 {
            continue;
        }
        for _ in 1..r {
            c = mul_mod(c, c, n);
            if c == n - 1 {
                continue 'outer;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(crate::mod_arith::MOD));
        assert!(is_prime(998_244_353));
        assert!(!is_prime(1_000_000_007 * 3));
        assert!(!is_prime(999_999_937 * 2));
    }

    #[test]
    fn miller_rabin() {
        for n in 0..20_000 {
            assert_eq!(is_prime_u64(n), is_prime(n), "{}", n);
        }
        // strong pseudoprimes to small bases
        for n in [2_047u64, 1_373_653, 25_326_001, 3_215_031_751, 3_825_123_056_546_413_051] {
            assert!(!is_prime_u64(n), "{}", n);
        }
        assert!(is_prime_u64(18_446_744_073_709_551_557));
        assert!(is_prime_u64((1 << 61) - 1));
        assert!(!is_prime_u64(u64::MAX));
    }
}
