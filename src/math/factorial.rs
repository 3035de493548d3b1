use log::debug;

use super::prime::is_prime_u64;
use crate::error::{Error, Result};
use crate::mod_arith::{mod_pow, mul_mod as mul};

fn gen_factorials(n_bound: usize, modulus: u64) -> Result<(Vec<u64>, Vec<u64>)> {
    if modulus == 0 {
        return Err(Error::ZeroModulus);
    }
    if n_bound as u64 >= modulus {
        return Err(Error::ModulusTooSmall {
            n: n_bound,
            modulus,
        });
    }
    if !is_prime_u64(modulus) {
        return Err(Error::CompositeModulus { modulus });
    }

    let mut fac = Vec::with_capacity(n_bound + 1);
    fac.push(1);
    for i in 1..=n_bound {
        fac.push(mul(fac[i - 1], i as u64, modulus));
    }

    // p > n_bound, so fac[n_bound] is a unit
    let mut ifac = vec![1; n_bound + 1];
    ifac[n_bound] = mod_pow(fac[n_bound], modulus - 2, modulus);
    for i in (1..=n_bound).rev() {
        ifac[i - 1] = mul(ifac[i], i as u64, modulus);
    }

    Ok((fac, ifac))
}

/// Factorials `0!..=n!` and their inverses modulo a prime `p > n`.
///
/// ```
/// use security_lines::math::factorial::Factorials;
///
/// let table = Factorials::new(5, 1_000_000_007).unwrap();
/// assert_eq!(table.fac(), [1, 1, 2, 6, 24, 120]);
/// assert_eq!(table.binom(5, 2).unwrap(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorials {
    modulus: u64,
    fac: Vec<u64>,
    ifac: Vec<u64>,
}

impl Factorials {
    pub fn new(n_bound: usize, modulus: u64) -> Result<Self> {
        let (fac, ifac) = gen_factorials(n_bound, modulus)?;
        debug!("precomputed factorials up to {} mod {}", n_bound, modulus);
        Ok(Self { modulus, fac, ifac })
    }

    /// Rebuilds both tables for a new `(n_bound, modulus)`. Leaves `self` untouched on error.
    pub fn precompute(&mut self, n_bound: usize, modulus: u64) -> Result<()> {
        *self = Self::new(n_bound, modulus)?;
        Ok(())
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Largest `n` with a precomputed `n!`.
    pub fn bound(&self) -> usize {
        self.fac.len() - 1
    }

    pub fn fac(&self) -> &[u64] {
        &self.fac
    }

    pub fn ifac(&self) -> &[u64] {
        &self.ifac
    }

    fn check_range(&self, n: u64) -> Result<usize> {
        let bound = self.bound();
        if n > bound as u64 {
            return Err(Error::OutOfRange { n, bound });
        }
        Ok(n as usize)
    }

    pub fn factorial(&self, n: u64) -> Result<u64> {
        Ok(self.fac[self.check_range(n)?])
    }

    pub fn inv_factorial(&self, n: u64) -> Result<u64> {
        Ok(self.ifac[self.check_range(n)?])
    }

    /// `C(n, r) mod p`. Zero whenever `r < 0` or `r > n`.
    pub fn binom(&self, n: i64, r: i64) -> Result<u64> {
        if n < 0 || r < 0 || r > n {
            return Ok(0);
        }
        let n = self.check_range(n as u64)?;
        let r = r as usize;
        let p = self.modulus;
        Ok(mul(mul(self.fac[n], self.ifac[r], p), self.ifac[n - r], p))
    }

    /// `C(n, r) mod p` for arbitrary `n` via Lucas' theorem.
    /// Requires the table to cover every residue, i.e. `bound() == p - 1`.
    pub fn binom_lucas(&self, mut n: u64, mut r: u64) -> Result<u64> {
        let p = self.modulus;
        self.check_range(p - 1)?;

        let mut acc = 1 % p;
        while r > 0 {
            let x = (n % p) as usize;
            let y = (r % p) as usize;
            if x < y {
                return Ok(0);
            }
            acc = mul(acc, self.fac[x], p);
            acc = mul(acc, self.ifac[y], p);
            acc = mul(acc, self.ifac[x - y], p);

            n /= p;
            r /= p;
        }
        Ok(acc)
    }
}
