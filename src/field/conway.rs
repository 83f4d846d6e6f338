//! Defining polynomials for generated fields
//!
//! Small fields use tabulated Conway polynomials. Everything else gets the
//! sparsest monic irreducible a bounded search can find, which keeps the
//! sparse reduction pass cheap.

use crate::field::{FieldError, FieldResult};
use crate::polynomial::{modp, Polynomial};
use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use std::collections::HashMap;
use tracing::trace;

/// Largest coefficient value tried for binomial and trinomial candidates
const SPARSE_SEARCH_BOUND: u64 = 32;

lazy_static! {
    /// Conway polynomials keyed by (p, d), coefficients in ascending order
    static ref CONWAY_TABLE: HashMap<(u32, usize), &'static [u32]> = {
        let entries: [((u32, usize), &'static [u32]); 24] = [
            ((2, 1), &[1, 1]),
            ((2, 2), &[1, 1, 1]),
            ((2, 3), &[1, 1, 0, 1]),
            ((2, 4), &[1, 1, 0, 0, 1]),
            ((2, 5), &[1, 0, 1, 0, 0, 1]),
            ((2, 6), &[1, 1, 0, 1, 1, 0, 1]),
            ((2, 7), &[1, 1, 0, 0, 0, 0, 0, 1]),
            ((2, 8), &[1, 0, 1, 1, 1, 0, 0, 0, 1]),
            ((3, 1), &[1, 1]),
            ((3, 2), &[2, 2, 1]),
            ((3, 3), &[1, 2, 0, 1]),
            ((3, 4), &[2, 0, 0, 2, 1]),
            ((3, 5), &[1, 2, 0, 0, 0, 1]),
            ((3, 6), &[2, 2, 1, 0, 2, 0, 1]),
            ((5, 1), &[3, 1]),
            ((5, 2), &[2, 4, 1]),
            ((5, 3), &[3, 3, 0, 1]),
            ((5, 4), &[2, 4, 4, 0, 1]),
            ((5, 5), &[3, 4, 0, 0, 0, 1]),
            ((7, 1), &[4, 1]),
            ((7, 2), &[3, 6, 1]),
            ((7, 3), &[4, 0, 6, 1]),
            ((7, 4), &[3, 4, 5, 0, 1]),
            ((7, 5), &[4, 1, 0, 0, 0, 1]),
        ];
        entries.into_iter().collect()
    };
}

/// Returns a monic irreducible polynomial of degree `degree` over `F_p`.
pub fn defining_polynomial(p: &BigInt, degree: usize) -> FieldResult<Polynomial> {
    if *p <= BigInt::one() {
        return Err(FieldError::InvalidModulus(format!(
            "characteristic must be a prime, got {}",
            p
        )));
    }
    if degree == 0 {
        return Err(FieldError::InvalidModulus(
            "extension degree must be at least 1".into(),
        ));
    }

    if let Some(coeffs) = p.to_u32().and_then(|small| CONWAY_TABLE.get(&(small, degree))) {
        trace!(prime = %p, degree, "using tabulated Conway polynomial");
        return Ok(Polynomial::new(
            coeffs.iter().map(|&c| BigInt::from(c)).collect(),
        ));
    }

    if let Some(found) = search_binomial(p, degree).or_else(|| search_trinomial(p, degree)) {
        return Ok(found);
    }
    search_dense(p, degree)
}

/// Rabin's irreducibility test for a monic `f` over `F_p`:
/// `x^(p^d) ≡ x (mod f)` and `gcd(x^(p^(d/q)) - x, f) = 1` for every prime
/// `q` dividing `d`.
pub fn is_irreducible(f: &Polynomial, p: &BigInt) -> bool {
    let d = match f.degree() {
        Some(0) | None => return false,
        Some(1) => return true,
        Some(d) => d,
    };
    let f = f.coefficients();
    let p_exp = match p.to_biguint() {
        Some(e) => e,
        None => return false,
    };

    // frob[i] = x^(p^i) mod f
    let x = vec![BigInt::zero(), BigInt::one()];
    let mut frob = Vec::with_capacity(d + 1);
    frob.push(x.clone());
    for i in 1..=d {
        match modp::powmod(&frob[i - 1], &p_exp, f, p) {
            Some(next) => frob.push(next),
            None => return false,
        }
    }
    if frob[d] != x {
        return false;
    }

    prime_factors(d).into_iter().all(|q| {
        let h = modp::sub(&frob[d / q], &x, p);
        matches!(modp::gcd(&h, f, p), Some(g) if g.len() == 1)
    })
}

fn prime_factors(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    let mut q = 2;
    while q * q <= n {
        if n % q == 0 {
            factors.push(q);
            while n % q == 0 {
                n /= q;
            }
        }
        q += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

fn search_bound(p: &BigInt) -> u64 {
    p.to_u64().map_or(SPARSE_SEARCH_BOUND, |p| p.min(SPARSE_SEARCH_BOUND))
}

fn monic_with(degree: usize, terms: &[(usize, u64)]) -> Polynomial {
    let mut coefficients = vec![BigInt::zero(); degree + 1];
    coefficients[degree] = BigInt::one();
    for &(i, c) in terms {
        coefficients[i] = BigInt::from(c);
    }
    Polynomial::new(coefficients)
}

/// x^d + a
fn search_binomial(p: &BigInt, degree: usize) -> Option<Polynomial> {
    (1..search_bound(p)).find_map(|a| {
        let candidate = monic_with(degree, &[(0, a)]);
        is_irreducible(&candidate, p).then(|| {
            trace!(prime = %p, degree, a, "found irreducible binomial");
            candidate
        })
    })
}

/// x^d + b*x^k + a
fn search_trinomial(p: &BigInt, degree: usize) -> Option<Polynomial> {
    let bound = search_bound(p);
    for k in 1..degree {
        for a in 1..bound {
            for b in 1..bound {
                let candidate = monic_with(degree, &[(0, a), (k, b)]);
                if is_irreducible(&candidate, p) {
                    trace!(prime = %p, degree, k, a, b, "found irreducible trinomial");
                    return Some(candidate);
                }
            }
        }
    }
    None
}

/// Enumerates monic polynomials with constant term first, counting in base p
fn search_dense(p: &BigInt, degree: usize) -> FieldResult<Polynomial> {
    let total: BigInt = num_traits::pow(p.clone(), degree);
    let mut n = BigInt::one();
    while n < total {
        let mut coefficients = Vec::with_capacity(degree + 1);
        let mut rest = n.clone();
        for _ in 0..degree {
            let (q, r) = rest.div_mod_floor(p);
            coefficients.push(r);
            rest = q;
        }
        coefficients.push(BigInt::one());

        let candidate = Polynomial::new(coefficients);
        if is_irreducible(&candidate, p) {
            trace!(prime = %p, degree, "found irreducible by dense search");
            return Ok(candidate);
        }
        n += 1;
    }
    Err(FieldError::InvalidModulus(format!(
        "no irreducible polynomial of degree {} over F_{}",
        degree, p
    )))
}
