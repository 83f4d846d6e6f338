use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fq::{reduce_with, ContextOptions, Fq, FqContext, Reduction, ReductionPolicy};
use num_bigint::BigInt;
use rand::Rng;
use std::time::Duration;

/// BN254 base field modulus
const BN254_MODULUS: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";

fn context(degree: usize, policy: ReductionPolicy) -> FqContext {
    let p: BigInt = BN254_MODULUS.parse().unwrap();
    FqContext::generated_with_options(p, degree, ContextOptions::with_var("u").policy(policy))
        .unwrap()
}

/// Generate a random element with coefficients below the prime
fn random_fq(ctx: &FqContext) -> Fq<'_> {
    let mut rng = rand::thread_rng();
    let coeffs = (0..ctx.degree())
        .map(|_| {
            let limbs: [u64; 4] = std::array::from_fn(|_| rng.gen());
            let bytes: Vec<u8> = limbs.iter().flat_map(|x| x.to_le_bytes()).collect();
            BigInt::from_bytes_le(num_bigint::Sign::Plus, &bytes) % ctx.prime()
        })
        .collect();
    Fq::from_coefficients(ctx, coeffs)
}

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reduction");
    group.measurement_time(Duration::from_secs(5));

    for degree in [2usize, 6, 12] {
        let ctx = context(degree, ReductionPolicy::Auto);
        let a = random_fq(&ctx);
        let b = random_fq(&ctx);
        let product = fq::polynomial::mul_coefficients(a.coefficients(), b.coefficients());

        for strategy in [Reduction::Sparse, Reduction::Newton] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), degree),
                &product,
                |bench, product| {
                    bench.iter(|| {
                        let mut buf = product.clone();
                        reduce_with(&mut buf, &ctx, strategy);
                        black_box(buf)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_field_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field Operations");

    for policy in [ReductionPolicy::Sparse, ReductionPolicy::Newton] {
        let ctx = context(6, policy);
        let a = random_fq(&ctx);
        let b = random_fq(&ctx);

        group.bench_function(format!("{:?}/addition", policy), |bencher| {
            bencher.iter(|| black_box(&a + &b))
        });

        group.bench_function(format!("{:?}/multiplication", policy), |bencher| {
            bencher.iter(|| black_box(&a * &b))
        });

        group.bench_function(format!("{:?}/squaring", policy), |bencher| {
            bencher.iter(|| black_box(a.square()))
        });

        group.bench_function(format!("{:?}/inversion", policy), |bencher| {
            bencher.iter(|| black_box(a.inverse()))
        });

        group.bench_function(format!("{:?}/frobenius", policy), |bencher| {
            bencher.iter(|| black_box(a.frobenius(1)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let ctx = context(4, ReductionPolicy::Auto);
    let elements: Vec<Fq<'_>> = (0..100).map(|_| random_fq(&ctx)).collect();

    let mut group = c.benchmark_group("Batch Operations");
    group.sample_size(10);

    group.bench_function("batch/invert", |bencher| {
        bencher.iter(|| {
            let mut copy = elements.clone();
            black_box(fq::batch_invert(&mut copy))
        })
    });

    group.bench_function("batch/product", |bencher| {
        bencher.iter(|| {
            elements
                .iter()
                .fold(Fq::one(&ctx), |acc, x| &acc * x)
        })
    });

    let e = BigInt::from(65537);
    group.bench_function("batch/pow", |bencher| {
        bencher.iter(|| black_box(fq::pow_all(&elements, &e)))
    });

    group.finish();
}

criterion_group!(benches, bench_reduction, bench_field_arithmetic, bench_batch);
criterion_main!(benches);
