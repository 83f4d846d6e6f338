//! Reduction of integer polynomials to canonical field elements
//!
//! Every arithmetic result passes through [`reduce`]. Inputs no longer than
//! the extension degree only need their coefficients taken mod p. Longer
//! inputs (products reach length 2d - 1) are brought below degree d either by
//! eliminating the top coefficients with the sparse modulus terms, or by a
//! Newton division against the precomputed inverse of the reversed modulus.

use crate::field::context::{FqContext, ReductionPolicy};
use crate::polynomial::{modp, strip_trailing_zeros};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use std::borrow::Cow;
use tracing::trace;

/// Reduction strategy for one input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Length at most d: coefficients mod p only
    Coefficientwise,
    /// Eliminate the top coefficients with the sparse modulus terms
    Sparse,
    /// Quotient and remainder by Newton division with the cached inverse
    Newton,
}

impl Reduction {
    /// Picks the strategy for a normalised input of length `len`
    pub fn select(ctx: &FqContext, len: usize) -> Self {
        if len <= ctx.degree() {
            return Reduction::Coefficientwise;
        }
        match ctx.policy() {
            ReductionPolicy::Sparse => Reduction::Sparse,
            ReductionPolicy::Newton => Reduction::Newton,
            ReductionPolicy::Auto if ctx.is_sparse() => Reduction::Sparse,
            ReductionPolicy::Auto => Reduction::Newton,
        }
    }
}

/// Reduces `buf` in place to the canonical representative modulo the field
/// modulus and p: length at most d, coefficients in `[0, p)`, no trailing
/// zeros.
pub fn reduce(buf: &mut Vec<BigInt>, ctx: &FqContext) {
    strip_trailing_zeros(buf);
    let strategy = Reduction::select(ctx, buf.len());
    apply(buf, ctx, strategy);
}

/// Like [`reduce`] but with a forced strategy for over-length input.
/// Inputs of length at most d are always reduced coefficient-wise.
pub fn reduce_with(buf: &mut Vec<BigInt>, ctx: &FqContext, strategy: Reduction) {
    strip_trailing_zeros(buf);
    let strategy = if buf.len() <= ctx.degree() {
        Reduction::Coefficientwise
    } else {
        strategy
    };
    apply(buf, ctx, strategy);
}

fn apply(buf: &mut Vec<BigInt>, ctx: &FqContext, strategy: Reduction) {
    assert_eq!(
        ctx.inverse().len(),
        ctx.degree() + 1,
        "context inverse does not match its modulus"
    );
    trace!(len = buf.len(), degree = ctx.degree(), ?strategy, "reducing");

    match strategy {
        Reduction::Coefficientwise => {
            modp::reduce_coefficients(buf, ctx.prime());
            strip_trailing_zeros(buf);
        }
        Reduction::Sparse => reduce_sparse(buf, ctx),
        Reduction::Newton => reduce_newton(buf, ctx),
    }
}

/// For i from the top down to d, uses `x^d ≡ -Σ a_k x^(j_k)` to move
/// `buf[i] * x^i` onto lower positions, then reduces what is left mod p.
fn reduce_sparse(buf: &mut Vec<BigInt>, ctx: &FqContext) {
    let d = ctx.degree();
    let p = ctx.prime();
    let terms = ctx.sparse_terms();
    let lower_terms = &terms[..terms.len() - 1];

    for i in (d..buf.len()).rev() {
        if buf[i].is_zero() {
            continue;
        }
        // keeps intermediates bounded by the products of residues
        let c = buf[i].mod_floor(p);
        for (a, j) in lower_terms.iter().rev() {
            buf[j + i - d] -= &c * a;
        }
        buf[i].set_zero();
    }

    buf.truncate(d);
    modp::reduce_coefficients(buf, p);
    strip_trailing_zeros(buf);
}

/// Replaces `buf` by the remainder of its division by the modulus. The
/// quotient is dropped and the new buffer holds exactly d slots.
fn reduce_newton(buf: &mut Vec<BigInt>, ctx: &FqContext) {
    let d = ctx.degree();
    let p = ctx.prime();
    modp::reduce_coefficients(buf, p);
    strip_trailing_zeros(buf);
    if buf.len() <= d {
        return;
    }

    let lq = buf.len() - d;
    let inverse: Cow<'_, [BigInt]> = if lq <= ctx.inverse().len() {
        Cow::Borrowed(ctx.inverse())
    } else {
        // only reachable for inputs longer than a product of two elements
        let reversed = modp::reverse(ctx.modulus().coefficients(), d + 1);
        let longer = modp::inv_series_newton(&reversed, lq, p)
            .expect("monic modulus has an invertible reversal");
        Cow::Owned(longer)
    };

    let (_quotient, remainder) =
        modp::divrem_newton_preinv(buf, ctx.modulus().coefficients(), &inverse, p);

    let mut r = Vec::with_capacity(d);
    r.extend(remainder);
    *buf = r;
    strip_trailing_zeros(buf);
}
