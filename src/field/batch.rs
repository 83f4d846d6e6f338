//! Operations over slices of field elements

use crate::field::{FieldError, FieldResult, Fq};
use num_bigint::BigInt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch inversion of multiple field elements.
/// Uses one inversion and 3(n - 1) multiplications (Montgomery's trick).
/// On error the slice is left untouched.
pub fn batch_invert(elements: &mut [Fq<'_>]) -> FieldResult<()> {
    let Some(first) = elements.first() else {
        return Ok(());
    };
    let ctx = first.context();

    let n = elements.len();
    let mut products = Vec::with_capacity(n);
    let mut acc = Fq::one(ctx);

    // Compute prefix products
    for element in elements.iter() {
        if element.is_zero() {
            return Err(FieldError::NotInvertible);
        }
        products.push(acc.clone());
        acc = &acc * element;
    }

    let mut inv = acc.inverse()?;

    // Peel individual inverses off from the back
    for i in (0..n).rev() {
        let tmp = &elements[i] * &inv;
        elements[i] = &products[i] * &inv;
        inv = tmp;
    }

    Ok(())
}

/// Raises every element to the same power. The elements are independent, so
/// with the `parallel` feature the work is spread over rayon's pool.
pub fn pow_all<'ctx>(elements: &[Fq<'ctx>], e: &BigInt) -> FieldResult<Vec<Fq<'ctx>>> {
    #[cfg(feature = "parallel")]
    {
        elements.par_iter().map(|a| a.pow(e)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        elements.iter().map(|a| a.pow(e)).collect()
    }
}
