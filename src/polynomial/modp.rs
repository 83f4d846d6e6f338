//! Coefficient-slice arithmetic in `F_p[x]`
//!
//! Every routine takes the prime `p` explicitly and returns coefficients in
//! `[0, p)`. Routines that need to invert a leading coefficient return `None`
//! when that coefficient is not a unit modulo `p`, which only happens when `p`
//! is not prime.

use super::{mul_coefficients, strip_trailing_zeros};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Replaces every coefficient by its non-negative residue modulo `p`
pub fn reduce_coefficients(coefficients: &mut [BigInt], p: &BigInt) {
    for c in coefficients.iter_mut() {
        if c.is_negative() || &*c >= p {
            *c = c.mod_floor(p);
        }
    }
}

/// Inverse of `a` modulo `p`, if it exists
pub fn inv_mod(a: &BigInt, p: &BigInt) -> Option<BigInt> {
    let a = a.mod_floor(p);
    if a.is_zero() {
        return None;
    }
    let egcd = a.extended_gcd(p);
    if !egcd.gcd.is_one() {
        return None;
    }
    Some(egcd.x.mod_floor(p))
}

/// Reverses `a` as a polynomial of length `n`, padding with zeros
pub fn reverse(a: &[BigInt], n: usize) -> Vec<BigInt> {
    (0..n)
        .map(|i| a.get(n - 1 - i).cloned().unwrap_or_else(BigInt::zero))
        .collect()
}

pub fn add(a: &[BigInt], b: &[BigInt], p: &BigInt) -> Vec<BigInt> {
    let mut out = vec![BigInt::zero(); a.len().max(b.len())];
    for (i, c) in a.iter().enumerate() {
        out[i] += c;
    }
    for (i, c) in b.iter().enumerate() {
        out[i] += c;
    }
    reduce_coefficients(&mut out, p);
    strip_trailing_zeros(&mut out);
    out
}

pub fn sub(a: &[BigInt], b: &[BigInt], p: &BigInt) -> Vec<BigInt> {
    let mut out = vec![BigInt::zero(); a.len().max(b.len())];
    for (i, c) in a.iter().enumerate() {
        out[i] += c;
    }
    for (i, c) in b.iter().enumerate() {
        out[i] -= c;
    }
    reduce_coefficients(&mut out, p);
    strip_trailing_zeros(&mut out);
    out
}

pub fn scalar_mul(a: &[BigInt], c: &BigInt, p: &BigInt) -> Vec<BigInt> {
    let mut out: Vec<BigInt> = a.iter().map(|x| x * c).collect();
    reduce_coefficients(&mut out, p);
    strip_trailing_zeros(&mut out);
    out
}

/// Full product modulo `p`, normalised
pub fn mul(a: &[BigInt], b: &[BigInt], p: &BigInt) -> Vec<BigInt> {
    let mut out = mul_coefficients(a, b);
    reduce_coefficients(&mut out, p);
    strip_trailing_zeros(&mut out);
    out
}

/// The first `n` coefficients of `a * b` modulo `p`; always of length `n`
pub fn mullow(a: &[BigInt], b: &[BigInt], n: usize, p: &BigInt) -> Vec<BigInt> {
    let mut out = vec![BigInt::zero(); n];
    for (i, x) in a.iter().enumerate().take(n) {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate().take(n - i) {
            out[i + j] += x * y;
        }
    }
    reduce_coefficients(&mut out, p);
    out
}

/// Power series inverse of `f` modulo `x^n` by Newton iteration.
///
/// Each step doubles the precision using `g <- g * (2 - f * g)`.
/// Returns `None` if the constant term of `f` is not a unit.
pub fn inv_series_newton(f: &[BigInt], n: usize, p: &BigInt) -> Option<Vec<BigInt>> {
    if n == 0 {
        return Some(Vec::new());
    }
    let c0 = inv_mod(f.first()?, p)?;

    let mut g = vec![c0];
    let mut k = 1;
    while k < n {
        let k2 = (2 * k).min(n);
        let fg = mullow(f, &g, k2, p);
        let mut t: Vec<BigInt> = fg.iter().map(|c| -c).collect();
        t[0] += 2;
        reduce_coefficients(&mut t, p);
        g = mullow(&g, &t, k2, p);
        k = k2;
    }
    g.resize(n, BigInt::zero());
    Some(g)
}

/// Schoolbook division with remainder. `b` must be normalised and non-zero.
pub fn divrem_basecase(
    a: &[BigInt],
    b: &[BigInt],
    p: &BigInt,
) -> Option<(Vec<BigInt>, Vec<BigInt>)> {
    let lb = b.len();
    let lead_inv = inv_mod(b.last()?, p)?;

    let mut r = a.to_vec();
    reduce_coefficients(&mut r, p);
    strip_trailing_zeros(&mut r);
    if r.len() < lb {
        return Some((Vec::new(), r));
    }

    let mut q = vec![BigInt::zero(); r.len() - lb + 1];
    while r.len() >= lb {
        let shift = r.len() - lb;
        let c = (&r[r.len() - 1] * &lead_inv).mod_floor(p);
        for (k, bk) in b.iter().enumerate() {
            r[shift + k] = (&r[shift + k] - &c * bk).mod_floor(p);
        }
        q[shift] = c;
        strip_trailing_zeros(&mut r);
    }
    strip_trailing_zeros(&mut q);
    Some((q, r))
}

/// Division with remainder using a precomputed inverse of `reverse(b)`.
///
/// `binv` must hold at least `a.len() - b.len() + 1` terms of the power series
/// inverse of the reversal of `b`. The quotient is obtained from a single
/// truncated product, `rev(q) = rev(a) * binv mod x^lq`, and the remainder
/// from one more, `r = a - q * b mod x^(lb - 1)`. The quotient has length
/// `a.len() - b.len() + 1` and the remainder `b.len() - 1`; neither is
/// normalised.
pub fn divrem_newton_preinv(
    a: &[BigInt],
    b: &[BigInt],
    binv: &[BigInt],
    p: &BigInt,
) -> (Vec<BigInt>, Vec<BigInt>) {
    let la = a.len();
    let lb = b.len();
    assert!(lb > 0, "division by the zero polynomial");

    if la < lb {
        let mut r = a.to_vec();
        reduce_coefficients(&mut r, p);
        return (Vec::new(), r);
    }

    let lq = la - lb + 1;
    assert!(
        binv.len() >= lq,
        "precomputed inverse too short: {} < {}",
        binv.len(),
        lq
    );

    let arev: Vec<BigInt> = (0..lq).map(|i| a[la - 1 - i].clone()).collect();
    let qrev = mullow(&arev, &binv[..lq], lq, p);
    let q = reverse(&qrev, lq);

    let qb = mullow(&q, b, lb - 1, p);
    let r = (0..lb - 1)
        .map(|i| (&a[i] - &qb[i]).mod_floor(p))
        .collect();
    (q, r)
}

pub fn rem(a: &[BigInt], b: &[BigInt], p: &BigInt) -> Option<Vec<BigInt>> {
    divrem_basecase(a, b, p).map(|(_, r)| r)
}

pub fn mulmod(a: &[BigInt], b: &[BigInt], f: &[BigInt], p: &BigInt) -> Option<Vec<BigInt>> {
    rem(&mul(a, b, p), f, p)
}

/// `base^e mod f` by left-to-right square and multiply
pub fn powmod(base: &[BigInt], e: &BigUint, f: &[BigInt], p: &BigInt) -> Option<Vec<BigInt>> {
    let base = rem(base, f, p)?;
    let mut result = rem(&[BigInt::one()], f, p)?;
    for i in (0..e.bits()).rev() {
        result = mulmod(&result, &result, f, p)?;
        if e.bit(i) {
            result = mulmod(&result, &base, f, p)?;
        }
    }
    Some(result)
}

/// Scales `a` so its leading coefficient is 1
pub fn make_monic(a: &[BigInt], p: &BigInt) -> Option<Vec<BigInt>> {
    match a.last() {
        None => Some(Vec::new()),
        Some(lead) => Some(scalar_mul(a, &inv_mod(lead, p)?, p)),
    }
}

/// Monic greatest common divisor
pub fn gcd(a: &[BigInt], b: &[BigInt], p: &BigInt) -> Option<Vec<BigInt>> {
    let mut r0 = a.to_vec();
    reduce_coefficients(&mut r0, p);
    strip_trailing_zeros(&mut r0);
    let mut r1 = b.to_vec();
    reduce_coefficients(&mut r1, p);
    strip_trailing_zeros(&mut r1);

    while !r1.is_empty() {
        let r = rem(&r0, &r1, p)?;
        r0 = r1;
        r1 = r;
    }
    make_monic(&r0, p)
}

/// Inverse of `a` modulo `f` by the extended Euclidean algorithm.
///
/// Returns `None` when `a` and `f` share a factor (in particular when
/// `a ≡ 0 mod f`).
pub fn invmod(a: &[BigInt], f: &[BigInt], p: &BigInt) -> Option<Vec<BigInt>> {
    let mut r0 = f.to_vec();
    reduce_coefficients(&mut r0, p);
    strip_trailing_zeros(&mut r0);
    let mut r1 = rem(a, &r0, p)?;
    if r1.is_empty() {
        return None;
    }

    // s_i * a ≡ r_i (mod f)
    let mut s0: Vec<BigInt> = Vec::new();
    let mut s1 = vec![BigInt::one()];
    while !r1.is_empty() {
        let (q, r) = divrem_basecase(&r0, &r1, p)?;
        let s = sub(&s0, &mul(&q, &s1, p), p);
        r0 = r1;
        r1 = r;
        s0 = s1;
        s1 = s;
    }

    if r0.len() != 1 {
        return None;
    }
    let c = inv_mod(&r0[0], p)?;
    rem(&scalar_mul(&s0, &c, p), f, p)
}
