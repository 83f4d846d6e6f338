//! Dense univariate polynomials with arbitrary-precision integer coefficients
//!
//! Coefficients are stored in ascending order of degree. A normalised
//! polynomial carries no trailing zero coefficients, so the zero polynomial
//! has length 0. Arithmetic here is over the integers; the modulo-p routines
//! used by the field live in [`modp`].

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

pub mod modp;

/// Represents a univariate polynomial over the integers
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    /// Coefficients of the polynomial in ascending order of degree
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Creates a new polynomial from its coefficients, dropping trailing zeros
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        let mut poly = Self { coefficients };
        poly.normalise();
        poly
    }

    /// Convenience constructor from machine integers
    pub fn from_i64s(values: &[i64]) -> Self {
        Self::new(values.iter().map(|&v| BigInt::from(v)).collect())
    }

    /// Creates the zero polynomial
    pub fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    /// Creates the constant polynomial 1
    pub fn one() -> Self {
        Self {
            coefficients: vec![BigInt::one()],
        }
    }

    /// Number of stored coefficients (degree + 1, or 0 for the zero polynomial)
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_one()
    }

    /// Returns the degree, or `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Returns a reference to the polynomial's coefficients
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<BigInt> {
        self.coefficients
    }

    /// Coefficient of `x^i`; zero past the end
    pub fn coeff(&self, i: usize) -> BigInt {
        self.coefficients.get(i).cloned().unwrap_or_else(BigInt::zero)
    }

    /// Sets the coefficient of `x^i`, growing or shrinking as needed
    pub fn set_coeff(&mut self, i: usize, value: BigInt) {
        if i >= self.coefficients.len() {
            if value.is_zero() {
                return;
            }
            self.coefficients.resize(i + 1, BigInt::zero());
        }
        self.coefficients[i] = value;
        self.normalise();
    }

    /// Removes trailing zero coefficients
    pub fn normalise(&mut self) {
        strip_trailing_zeros(&mut self.coefficients);
    }

    /// Human readable form in the given variable, highest degree first,
    /// e.g. `3*X^2+X-1`
    pub fn pretty(&self, var: &str) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        if self.len() == 1 {
            return self.coefficients[0].to_string();
        }

        let mut out = String::new();
        for (i, c) in self.coefficients.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let negative = c.is_negative();
            if negative {
                out.push('-');
            } else if !out.is_empty() {
                out.push('+');
            }

            let magnitude = c.abs();
            if i == 0 {
                out.push_str(&magnitude.to_string());
                continue;
            }
            if !magnitude.is_one() {
                out.push_str(&magnitude.to_string());
                out.push('*');
            }
            out.push_str(var);
            if i > 1 {
                out.push('^');
                out.push_str(&i.to_string());
            }
        }
        out
    }

    /// Raw form: the length, two spaces, then the coefficients in ascending
    /// order separated by single spaces, e.g. `3  1 0 2`
    pub fn to_raw_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let body: Vec<String> = self.coefficients.iter().map(|c| c.to_string()).collect();
        format!("{}  {}", self.len(), body.join(" "))
    }
}

impl From<Vec<BigInt>> for Polynomial {
    fn from(coefficients: Vec<BigInt>) -> Self {
        Self::new(coefficients)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty("x"))
    }
}

/// Drops trailing zeros from a coefficient buffer
pub fn strip_trailing_zeros(coefficients: &mut Vec<BigInt>) {
    while coefficients.last().map_or(false, |c| c.is_zero()) {
        coefficients.pop();
    }
}

/// Schoolbook product of two coefficient slices over the integers.
/// The result has length `a.len() + b.len() - 1` and is not normalised.
pub fn mul_coefficients(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![BigInt::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            result[i + j] += x * y;
        }
    }
    result
}

/// Squares a coefficient slice, using the symmetry of the product
pub fn sqr_coefficients(a: &[BigInt]) -> Vec<BigInt> {
    if a.is_empty() {
        return Vec::new();
    }

    let mut result = vec![BigInt::zero(); 2 * a.len() - 1];
    for i in 0..a.len() {
        if a[i].is_zero() {
            continue;
        }
        result[2 * i] += &a[i] * &a[i];
        for j in (i + 1)..a.len() {
            let cross: BigInt = &a[i] * &a[j];
            result[i + j] += cross << 1;
        }
    }
    result
}

impl<'a> Add for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Self::Output {
        let max_len = self.len().max(other.len());
        let mut result = vec![BigInt::zero(); max_len];

        for (i, coeff) in self.coefficients.iter().enumerate() {
            result[i] = coeff.clone();
        }
        for (i, coeff) in other.coefficients.iter().enumerate() {
            result[i] += coeff;
        }

        Polynomial::new(result)
    }
}

impl<'a> Sub for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Self::Output {
        let max_len = self.len().max(other.len());
        let mut result = vec![BigInt::zero(); max_len];

        for (i, coeff) in self.coefficients.iter().enumerate() {
            result[i] = coeff.clone();
        }
        for (i, coeff) in other.coefficients.iter().enumerate() {
            result[i] -= coeff;
        }

        Polynomial::new(result)
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial {
            coefficients: self.coefficients.iter().map(|c| -c).collect(),
        }
    }
}

impl<'a> Mul for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Self) -> Self::Output {
        Polynomial::new(mul_coefficients(&self.coefficients, &other.coefficients))
    }
}
