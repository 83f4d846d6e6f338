//! Elements of GF(p^d)
//!
//! An [`Fq`] is a canonical polynomial of degree below d with coefficients in
//! `[0, p)`, tied to the context it was created in. Mixing elements of
//! different contexts is a programming error and panics.

use crate::field::context::FqContext;
use crate::field::reduce::reduce;
use crate::field::{FieldError, FieldResult};
use crate::polynomial::{modp, mul_coefficients, sqr_coefficients, Polynomial};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An element of the field described by `ctx`
#[derive(Clone, Debug)]
pub struct Fq<'ctx> {
    /// Canonical coefficients, lowest degree first
    coeffs: Vec<BigInt>,
    ctx: &'ctx FqContext,
}

impl<'ctx> Fq<'ctx> {
    /// Reduces an arbitrary integer polynomial into the field
    pub fn from_coefficients(ctx: &'ctx FqContext, mut coeffs: Vec<BigInt>) -> Self {
        reduce(&mut coeffs, ctx);
        Self { coeffs, ctx }
    }

    pub fn from_polynomial(ctx: &'ctx FqContext, poly: &Polynomial) -> Self {
        Self::from_coefficients(ctx, poly.coefficients().to_vec())
    }

    pub fn zero(ctx: &'ctx FqContext) -> Self {
        Self {
            coeffs: Vec::new(),
            ctx,
        }
    }

    pub fn one(ctx: &'ctx FqContext) -> Self {
        Self::from_coefficients(ctx, vec![BigInt::one()])
    }

    /// The class of X, the generator of the extension. For d = 1 this is
    /// the root of the linear modulus.
    pub fn gen(ctx: &'ctx FqContext) -> Self {
        Self::from_coefficients(ctx, vec![BigInt::zero(), BigInt::one()])
    }

    /// Embeds an integer as a constant element
    pub fn from_bigint(ctx: &'ctx FqContext, x: &BigInt) -> Self {
        // TODO: set the residue directly instead of going through a
        // one-coefficient reduction
        Self::from_coefficients(ctx, vec![x.clone()])
    }

    pub fn from_u64(ctx: &'ctx FqContext, x: u64) -> Self {
        Self::from_coefficients(ctx, vec![BigInt::from(x)])
    }

    pub fn from_i64(ctx: &'ctx FqContext, x: i64) -> Self {
        Self::from_coefficients(ctx, vec![BigInt::from(x)])
    }

    pub fn context(&self) -> &'ctx FqContext {
        self.ctx
    }

    /// Canonical coefficients, lowest degree first; empty for zero
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coeffs
    }

    pub fn into_polynomial(self) -> Polynomial {
        Polynomial::new(self.coeffs)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    fn with_coeffs(&self, mut coeffs: Vec<BigInt>) -> Self {
        reduce(&mut coeffs, self.ctx);
        Self {
            coeffs,
            ctx: self.ctx,
        }
    }

    fn check_context(&self, other: &Self) {
        assert!(
            std::ptr::eq(self.ctx, other.ctx),
            "Field contexts must match"
        );
    }

    fn combine(&self, other: &Self, sign: Sign) -> Self {
        self.check_context(other);
        let mut out = vec![BigInt::zero(); self.coeffs.len().max(other.coeffs.len())];
        for (i, c) in self.coeffs.iter().enumerate() {
            out[i] += c;
        }
        for (i, c) in other.coeffs.iter().enumerate() {
            match sign {
                Sign::Minus => out[i] -= c,
                _ => out[i] += c,
            }
        }
        self.with_coeffs(out)
    }

    /// self - 1
    pub fn sub_one(&self) -> Self {
        let mut out = self.coeffs.clone();
        if out.is_empty() {
            out.push(BigInt::zero());
        }
        out[0] -= 1;
        self.with_coeffs(out)
    }

    pub fn square(&self) -> Self {
        self.with_coeffs(sqr_coefficients(&self.coeffs))
    }

    pub fn mul_bigint(&self, x: &BigInt) -> Self {
        let x = x.mod_floor(self.ctx.prime());
        self.with_coeffs(self.coeffs.iter().map(|c| c * &x).collect())
    }

    pub fn mul_u64(&self, x: u64) -> Self {
        self.mul_bigint(&BigInt::from(x))
    }

    pub fn mul_i64(&self, x: i64) -> Self {
        self.mul_bigint(&BigInt::from(x))
    }

    /// Multiplicative inverse by the extended Euclidean algorithm modulo the
    /// field modulus
    pub fn inverse(&self) -> FieldResult<Self> {
        if self.is_zero() {
            return Err(FieldError::NotInvertible);
        }
        let inv = modp::invmod(
            &self.coeffs,
            self.ctx.modulus().coefficients(),
            self.ctx.prime(),
        )
        .ok_or(FieldError::NotInvertible)?;
        Ok(self.with_coeffs(inv))
    }

    pub fn checked_div(&self, other: &Self) -> FieldResult<Self> {
        self.check_context(other);
        Ok(self * &other.inverse()?)
    }

    /// Raises to any integer power; negative exponents invert first
    pub fn pow(&self, e: &BigInt) -> FieldResult<Self> {
        match e.sign() {
            Sign::NoSign => Ok(Self::one(self.ctx)),
            Sign::Plus => Ok(self.pow_biguint(e.magnitude())),
            Sign::Minus => Ok(self.inverse()?.pow_biguint(e.magnitude())),
        }
    }

    pub fn pow_u64(&self, e: u64) -> Self {
        self.pow_biguint(&BigUint::from(e))
    }

    /// Left-to-right square and multiply, reducing after every step
    pub fn pow_biguint(&self, e: &BigUint) -> Self {
        if e.is_zero() {
            return Self::one(self.ctx);
        }
        if self.is_zero() {
            return self.clone();
        }

        let mut result = self.clone();
        for i in (0..e.bits() - 1).rev() {
            result = result.square();
            if e.bit(i) {
                result = &result * self;
            }
        }
        result
    }

    /// The e-th power of the Frobenius automorphism, a^(p^e). The exponent
    /// is taken modulo d, so negative values give inverse automorphisms.
    pub fn frobenius(&self, e: i64) -> Self {
        let d = self.ctx.degree() as i64;
        let e = e.rem_euclid(d) as usize;
        if e == 0 || self.is_zero() {
            return self.clone();
        }
        let p = self.ctx.prime().magnitude();
        self.pow_biguint(&num_traits::pow(p.clone(), e))
    }

    /// The unique p-th root, which is a^(p^(d-1))
    pub fn pth_root(&self) -> Self {
        self.frobenius(-1)
    }

    /// Sum of the conjugates a^(p^i) for 0 <= i < d, an element of F_p
    pub fn trace(&self) -> BigInt {
        let mut acc = Self::zero(self.ctx);
        let mut conjugate = self.clone();
        for _ in 0..self.ctx.degree() {
            acc = &acc + &conjugate;
            conjugate = conjugate.frobenius(1);
        }
        debug_assert!(acc.coeffs.len() <= 1);
        acc.coeffs.first().cloned().unwrap_or_else(BigInt::zero)
    }

    /// Product of the conjugates, a^((p^d - 1) / (p - 1)), an element of F_p
    pub fn norm(&self) -> BigInt {
        let p = self.ctx.prime();
        let (q, _) = (self.ctx.order() - 1u32).div_rem(&(p - 1u32));
        let n = match q.to_biguint() {
            Some(q) => self.pow_biguint(&q),
            None => return BigInt::zero(),
        };
        debug_assert!(n.coeffs.len() <= 1);
        n.coeffs.first().cloned().unwrap_or_else(BigInt::zero)
    }

    /// Coefficients as `len  c0 c1 ...`
    pub fn to_raw_string(&self) -> String {
        Polynomial::new(self.coeffs.clone()).to_raw_string()
    }
}

impl<'ctx> PartialEq for Fq<'ctx> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ctx, other.ctx) && self.coeffs == other.coeffs
    }
}

impl<'ctx> Eq for Fq<'ctx> {}

impl<'ctx> fmt::Display for Fq<'ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Polynomial::new(self.coeffs.clone()).pretty(self.ctx.var()))
    }
}

impl<'a, 'ctx> Add for &'a Fq<'ctx> {
    type Output = Fq<'ctx>;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, Sign::Plus)
    }
}

impl<'ctx> Add for Fq<'ctx> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<'ctx> AddAssign for Fq<'ctx> {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl<'a, 'ctx> Sub for &'a Fq<'ctx> {
    type Output = Fq<'ctx>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, Sign::Minus)
    }
}

impl<'ctx> Sub for Fq<'ctx> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<'ctx> SubAssign for Fq<'ctx> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = &*self - &rhs;
    }
}

impl<'a, 'ctx> Mul for &'a Fq<'ctx> {
    type Output = Fq<'ctx>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.check_context(rhs);
        self.with_coeffs(mul_coefficients(&self.coeffs, &rhs.coeffs))
    }
}

impl<'ctx> Mul for Fq<'ctx> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<'ctx> MulAssign for Fq<'ctx> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl<'a, 'ctx> Neg for &'a Fq<'ctx> {
    type Output = Fq<'ctx>;

    fn neg(self) -> Self::Output {
        self.with_coeffs(self.coeffs.iter().map(|c| -c).collect())
    }
}

impl<'ctx> Neg for Fq<'ctx> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}
