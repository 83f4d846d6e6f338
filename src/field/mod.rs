//! Extension fields GF(p^d)
//!
//! A field is described once by an [`FqContext`] and its elements, [`Fq`],
//! borrow that context. Every arithmetic result is brought back to canonical
//! form by [`reduce`].

pub mod batch;
pub mod context;
pub mod conway;
pub mod fq;
pub mod reduce;

pub use batch::{batch_invert, pow_all};
pub use context::{ContextOptions, FqContext, ReductionPolicy, DEFAULT_SPARSE_TERM_LIMIT};
pub use conway::{defining_polynomial, is_irreducible};
pub use fq::Fq;
pub use reduce::{reduce, reduce_with, Reduction};

/// Error types for field operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Invalid modulus: {0}")]
    InvalidModulus(String),

    #[error("Element is not invertible")]
    NotInvertible,
}

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;
