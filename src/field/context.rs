//! Field descriptor for GF(p^d)
//!
//! An [`FqContext`] is built once and then only read. It keeps the modulus in
//! two forms (dense coefficients and sparse `(value, exponent)` terms) along
//! with the power series inverse of the reversed modulus that the Newton
//! division in [`crate::field::reduce`] consumes.

use crate::field::{conway, FieldError, FieldResult};
use crate::polynomial::{modp, Polynomial};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;
use tracing::debug;

/// Moduli with at most this many non-leading terms are reduced with the
/// sparse elimination pass under [`ReductionPolicy::Auto`]
pub const DEFAULT_SPARSE_TERM_LIMIT: usize = 8;

/// Which long-input reduction a context prefers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReductionPolicy {
    /// Sparse elimination when the modulus is sparse enough, Newton otherwise
    #[default]
    Auto,
    /// Always eliminate with the sparse terms
    Sparse,
    /// Always divide with the precomputed inverse
    Newton,
}

/// Construction options for a context
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextOptions {
    /// Variable name used when printing elements
    pub var: String,
    pub policy: ReductionPolicy,
    /// Threshold on non-leading modulus terms for [`ReductionPolicy::Auto`]
    pub sparse_term_limit: usize,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            var: "X".to_string(),
            policy: ReductionPolicy::Auto,
            sparse_term_limit: DEFAULT_SPARSE_TERM_LIMIT,
        }
    }
}

impl ContextOptions {
    /// Default options with the given variable name
    pub fn with_var(var: &str) -> Self {
        Self {
            var: var.to_string(),
            ..Self::default()
        }
    }

    pub fn policy(mut self, policy: ReductionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Immutable description of one finite field GF(p^d)
#[derive(Debug)]
pub struct FqContext {
    /// The characteristic p
    prime: BigInt,
    /// Monic modulus of degree d with coefficients in [0, p)
    modulus: Polynomial,
    /// Non-zero modulus terms, strictly increasing exponents, ending in (1, d)
    sparse_terms: Vec<(BigInt, usize)>,
    /// Inverse of reverse(modulus) modulo x^(d+1)
    inverse: Vec<BigInt>,
    options: ContextOptions,
}

impl FqContext {
    /// Creates the field `F_p[X] / (modulus)`.
    ///
    /// The modulus is reduced modulo `p` and must then be monic of exact
    /// degree `degree`. Primality of `p` and irreducibility of the modulus
    /// are the caller's responsibility.
    pub fn new(prime: BigInt, degree: usize, modulus: Polynomial, var: &str) -> FieldResult<Self> {
        Self::with_options(prime, degree, modulus, ContextOptions::with_var(var))
    }

    pub fn with_options(
        prime: BigInt,
        degree: usize,
        modulus: Polynomial,
        options: ContextOptions,
    ) -> FieldResult<Self> {
        if !prime.is_positive() {
            return Err(FieldError::InvalidModulus(format!(
                "characteristic must be positive, got {}",
                prime
            )));
        }
        if degree == 0 {
            return Err(FieldError::InvalidModulus(
                "extension degree must be at least 1".into(),
            ));
        }

        let mut coefficients = modulus.into_coefficients();
        modp::reduce_coefficients(&mut coefficients, &prime);
        let modulus = Polynomial::new(coefficients);

        if modulus.len() != degree + 1 {
            return Err(FieldError::InvalidModulus(format!(
                "expected a modulus of degree {}, got {}",
                degree,
                modulus.degree().map_or("-inf".to_string(), |d| d.to_string())
            )));
        }
        if !modulus.coefficients()[degree].is_one() {
            return Err(FieldError::InvalidModulus(
                "modulus must be monic".into(),
            ));
        }

        let sparse_terms: Vec<(BigInt, usize)> = modulus
            .coefficients()
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| (c.clone(), i))
            .collect();
        validate_sparse_terms(&sparse_terms, degree)?;

        let reversed = modp::reverse(modulus.coefficients(), degree + 1);
        let inverse = modp::inv_series_newton(&reversed, degree + 1, &prime).ok_or_else(|| {
            FieldError::InvalidModulus("reversed modulus has no power series inverse".into())
        })?;

        debug!(
            prime = %prime,
            degree,
            sparse_terms = sparse_terms.len(),
            policy = ?options.policy,
            "created field context"
        );

        Ok(Self {
            prime,
            modulus,
            sparse_terms,
            inverse,
            options,
        })
    }

    /// Creates GF(p^d) with a generated defining polynomial: a Conway
    /// polynomial when one is tabulated, otherwise the sparsest irreducible
    /// found by search.
    pub fn generated(prime: BigInt, degree: usize, var: &str) -> FieldResult<Self> {
        Self::generated_with_options(prime, degree, ContextOptions::with_var(var))
    }

    pub fn generated_with_options(
        prime: BigInt,
        degree: usize,
        options: ContextOptions,
    ) -> FieldResult<Self> {
        let modulus = conway::defining_polynomial(&prime, degree)?;
        Self::with_options(prime, degree, modulus, options)
    }

    /// The extension degree d
    pub fn degree(&self) -> usize {
        self.modulus.len() - 1
    }

    /// The characteristic p
    pub fn prime(&self) -> &BigInt {
        &self.prime
    }

    /// Number of elements, p^d
    pub fn order(&self) -> BigInt {
        num_traits::pow(self.prime.clone(), self.degree())
    }

    pub fn modulus(&self) -> &Polynomial {
        &self.modulus
    }

    pub fn sparse_terms(&self) -> &[(BigInt, usize)] {
        &self.sparse_terms
    }

    pub fn inverse(&self) -> &[BigInt] {
        &self.inverse
    }

    pub fn var(&self) -> &str {
        &self.options.var
    }

    pub fn policy(&self) -> ReductionPolicy {
        self.options.policy
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Whether the modulus is sparse enough for the elimination pass
    pub fn is_sparse(&self) -> bool {
        self.sparse_terms.len() - 1 <= self.options.sparse_term_limit
    }
}

impl fmt::Display for FqContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p = {}", self.prime)?;
        writeln!(f, "d = {}", self.degree())?;
        writeln!(f, "f(X) = {}", self.modulus.pretty("X"))
    }
}

/// Checks the shape the sparse reduction relies on: non-zero values,
/// strictly increasing exponents, and the leading term `(1, d)` last.
fn validate_sparse_terms(terms: &[(BigInt, usize)], degree: usize) -> FieldResult<()> {
    match terms.last() {
        Some((value, exponent)) if value.is_one() && *exponent == degree => {}
        _ => {
            return Err(FieldError::InvalidModulus(
                "sparse terms must end with the leading term".into(),
            ))
        }
    }
    if terms.iter().any(|(value, _)| value.is_zero()) {
        return Err(FieldError::InvalidModulus(
            "sparse terms must be non-zero".into(),
        ));
    }
    if terms.windows(2).any(|w| w[0].1 >= w[1].1) {
        return Err(FieldError::InvalidModulus(
            "sparse term exponents must be strictly increasing".into(),
        ));
    }
    Ok(())
}
