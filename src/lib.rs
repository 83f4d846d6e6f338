//! fq: arithmetic in finite fields GF(p^d)
//!
//! Elements are polynomials of degree below d over the integers mod p,
//! reduced by a fixed monic modulus of degree d. Coefficients are
//! arbitrary-precision, so p may be any prime.
//!
//! ```
//! use fq::{Fq, FqContext, Polynomial};
//! use num_bigint::BigInt;
//!
//! let ctx = FqContext::new(BigInt::from(5), 2, Polynomial::from_i64s(&[2, 0, 1]), "x").unwrap();
//! let a = Fq::from_coefficients(&ctx, vec![BigInt::from(1), BigInt::from(1)]);
//! assert_eq!(a.square().to_string(), "2*x+4");
//! ```

pub mod field;
pub mod polynomial;

// Re-export commonly used types
pub use field::{
    batch_invert, defining_polynomial, is_irreducible, pow_all, reduce, reduce_with,
    ContextOptions, FieldError, FieldResult, Fq, FqContext, Reduction, ReductionPolicy,
};
pub use polynomial::Polynomial;

/// Feature flags
#[cfg(feature = "parallel")]
pub use rayon;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
