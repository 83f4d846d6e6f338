use fq::{Fq, FqContext, FieldError, Polynomial};
use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use proptest::prelude::*;

// 2^61 - 1
const MERSENNE_61: &str = "2305843009213693951";

lazy_static! {
    static ref GF2401: FqContext =
        FqContext::new(BigInt::from(7), 4, Polynomial::from_i64s(&[3, 4, 5, 0, 1]), "z").unwrap();
    static ref GF256: FqContext = FqContext::generated(BigInt::from(2), 8, "a").unwrap();
    static ref GF_BIG: FqContext =
        FqContext::generated(MERSENNE_61.parse().unwrap(), 3, "t").unwrap();
}

fn element(ctx: &'static FqContext, coeffs: Vec<u64>) -> Fq<'static> {
    Fq::from_coefficients(ctx, coeffs.into_iter().map(BigInt::from).collect())
}

prop_compose! {
    fn arb_gf2401()(coeffs in prop::collection::vec(0u64..7, 4)) -> Fq<'static> {
        element(&GF2401, coeffs)
    }
}

prop_compose! {
    fn arb_gf256()(coeffs in prop::collection::vec(0u64..2, 8)) -> Fq<'static> {
        element(&GF256, coeffs)
    }
}

prop_compose! {
    fn arb_gf_big()(coeffs in prop::collection::vec(any::<u64>(), 3)) -> Fq<'static> {
        element(&GF_BIG, coeffs)
    }
}

proptest! {
    #[test]
    fn test_field_addition_properties(
        a in arb_gf2401(),
        b in arb_gf2401(),
        c in arb_gf2401()
    ) {
        // Commutativity: a + b = b + a
        prop_assert_eq!(&a + &b, &b + &a);

        // Associativity: (a + b) + c = a + (b + c)
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));

        // Identity: a + 0 = a
        let zero = Fq::zero(&GF2401);
        prop_assert_eq!(&a + &zero, a.clone());

        // Inverse: a + (-a) = 0
        prop_assert_eq!(&a + &(-&a), zero);

        // a - b = a + (-b)
        prop_assert_eq!(&a - &b, &a + &(-&b));
    }

    #[test]
    fn test_field_multiplication_properties(
        a in arb_gf2401(),
        b in arb_gf2401(),
        c in arb_gf2401()
    ) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));

        let one = Fq::one(&GF2401);
        prop_assert_eq!(&a * &one, a.clone());

        // Distributivity: a * (b + c) = (a * b) + (a * c)
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));

        prop_assert_eq!(a.square(), &a * &a);
    }

    #[test]
    fn test_field_inverse_properties(a in arb_gf2401()) {
        if a.is_zero() {
            prop_assert_eq!(a.inverse(), Err(FieldError::NotInvertible));
        } else {
            let inv_a = a.inverse().unwrap();
            prop_assert!((&a * &inv_a).is_one());
            prop_assert!((&inv_a * &a).is_one());
        }
    }

    #[test]
    fn test_field_exponentiation_properties(
        a in arb_gf2401(),
        b in 0u64..50,
        c in 0u64..50
    ) {
        // a^(b+c) = a^b * a^c
        prop_assert_eq!(a.pow_u64(b + c), &a.pow_u64(b) * &a.pow_u64(c));

        // (a^b)^c = a^(b*c)
        prop_assert_eq!(a.pow_u64(b).pow_u64(c), a.pow_u64(b * c));

        prop_assert!(a.pow(&BigInt::zero()).unwrap().is_one());
        prop_assert_eq!(a.pow(&BigInt::one()).unwrap(), a.clone());
    }

    #[test]
    fn test_multiplicative_group_order(a in arb_gf2401()) {
        let q = GF2401.order();
        prop_assert_eq!(a.pow(&q).unwrap(), a.clone());
        if !a.is_zero() {
            prop_assert!(a.pow(&(q - 1)).unwrap().is_one());
            prop_assert_eq!(
                a.pow(&BigInt::from(-3)).unwrap(),
                a.inverse().unwrap().pow_u64(3)
            );
        }
    }

    #[test]
    fn test_frobenius_orbit(a in arb_gf2401()) {
        let mut b = a.clone();
        for _ in 0..GF2401.degree() {
            b = b.frobenius(1);
        }
        prop_assert_eq!(&b, &a);

        prop_assert_eq!(a.frobenius(2), a.pow_u64(49));
        prop_assert_eq!(a.frobenius(1).pth_root(), a.clone());
        prop_assert_eq!(a.pth_root().pow_u64(7), a.clone());
    }

    #[test]
    fn test_frobenius_is_a_ring_homomorphism(a in arb_gf256(), b in arb_gf256()) {
        prop_assert_eq!((&a + &b).frobenius(3), &a.frobenius(3) + &b.frobenius(3));
        prop_assert_eq!((&a * &b).frobenius(5), &a.frobenius(5) * &b.frobenius(5));
    }

    #[test]
    fn test_trace_and_norm(a in arb_gf2401(), b in arb_gf2401()) {
        let p = GF2401.prime().clone();

        let t = a.trace();
        prop_assert!(t >= BigInt::zero() && t < p);
        prop_assert_eq!((&a + &b).trace(), (a.trace() + b.trace()) % &p);

        let n = a.norm();
        prop_assert!(n >= BigInt::zero() && n < p);
        prop_assert_eq!((&a * &b).norm(), (a.norm() * b.norm()) % &p);
        prop_assert_eq!(a.is_zero(), n.is_zero());
    }

    #[test]
    fn test_large_characteristic(a in arb_gf_big(), b in arb_gf_big(), c in arb_gf_big()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        if !a.is_zero() {
            prop_assert!((&a * &a.inverse().unwrap()).is_one());
        }
        let p = GF_BIG.prime();
        prop_assert!(a.coefficients().iter().all(|x| x >= &BigInt::zero() && x < p));
        prop_assert!(a.coefficients().len() <= 3);
    }
}

#[test]
fn test_gf8_square_scenario() {
    // x^2 + x squared is x^4 + x^2; x^4 = x^2 + x, so the result is x
    let ctx = FqContext::new(BigInt::from(2), 3, Polynomial::from_i64s(&[1, 1, 0, 1]), "x").unwrap();
    let a = Fq::from_polynomial(&ctx, &Polynomial::from_i64s(&[0, 1, 1]));
    let sq = a.square();
    assert_eq!(sq.coefficients(), &[BigInt::from(0), BigInt::from(1)]);
    assert_eq!(sq, &a * &a);
}

#[test]
fn test_gf25_square_scenario() {
    // (x + 1)^2 = x^2 + 2x + 1 = 2x - 1 = 2x + 4 since x^2 = -2
    let ctx = FqContext::new(BigInt::from(5), 2, Polynomial::from_i64s(&[2, 0, 1]), "x").unwrap();
    let a = Fq::from_polynomial(&ctx, &Polynomial::from_i64s(&[1, 1]));
    assert_eq!((&a * &a).coefficients(), &[BigInt::from(4), BigInt::from(2)]);
}

#[test]
fn test_generator_order() {
    // Conway polynomials are primitive: X has order exactly 255 in GF(2^8)
    let x = Fq::gen(&GF256);
    assert!(x.pow_u64(255).is_one());
    for k in [1u64, 3, 5, 15, 17, 51, 85] {
        assert!(!x.pow_u64(k).is_one(), "X^{} = 1", k);
    }
}

#[test]
fn test_printing() {
    let x = Fq::gen(&GF2401);
    let a = &(&x * &x).mul_u64(3) - &Fq::one(&GF2401);
    assert_eq!(a.to_string(), "3*z^2+6");
    assert_eq!(a.to_raw_string(), "3  6 0 3");
    assert_eq!(
        GF2401.to_string(),
        "p = 7\nd = 4\nf(X) = X^4+5*X^2+4*X+3\n"
    );
}

#[test]
fn test_field_edge_cases() {
    let zero = Fq::zero(&GF2401);
    let one = Fq::one(&GF2401);
    assert!(zero.is_zero() && !zero.is_one());
    assert!(one.is_one() && !one.is_zero());
    assert_eq!(Fq::from_i64(&GF2401, 7), zero);
    assert_eq!(Fq::from_i64(&GF2401, -6), one);
    assert_eq!(
        zero.checked_div(&zero).unwrap_err(),
        FieldError::NotInvertible
    );
}
