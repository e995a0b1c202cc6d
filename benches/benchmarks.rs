use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fastbig::{div_mod_floor, floor_sqrt, to_decimal_str};
use num_bigint::{BigInt, RandBigInt};
use num_integer::{Integer, Roots};
use num_traits::One;
use rand::prelude::*;

fn random_bigint(bits: u64, rng: &mut StdRng) -> BigInt {
    rng.gen_bigint_range(&(BigInt::one() << (bits - 1)), &(BigInt::one() << bits))
}

fn bench_div_mod(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    for &(q_bits, n_bits) in [(10_000u64, 10_000u64), (50_000, 50_000), (200_000, 200_000)].iter() {
        let a = random_bigint(q_bits + n_bits, &mut rng);
        let b = random_bigint(n_bits, &mut rng);
        c.bench_function(&format!("div_mod_floor_{}_{}", q_bits, n_bits), |bencher| {
            bencher.iter(|| div_mod_floor(black_box(&a), black_box(&b)))
        });
        c.bench_function(&format!("host_div_rem_{}_{}", q_bits, n_bits), |bencher| {
            bencher.iter(|| black_box(&a).div_rem(black_box(&b)))
        });
    }
}

fn bench_to_decimal_str(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    for &bits in [10_000u64, 100_000, 400_000].iter() {
        let a = random_bigint(bits, &mut rng);
        c.bench_function(&format!("to_decimal_str_{}", bits), |bencher| {
            bencher.iter(|| to_decimal_str(black_box(&a)))
        });
        c.bench_function(&format!("host_to_string_{}", bits), |bencher| {
            bencher.iter(|| black_box(&a).to_string())
        });
    }
}

fn bench_floor_sqrt(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    for &bits in [10_000u64, 100_000, 400_000].iter() {
        let a = random_bigint(bits, &mut rng);
        c.bench_function(&format!("floor_sqrt_{}", bits), |bencher| {
            bencher.iter(|| floor_sqrt(black_box(&a)))
        });
        c.bench_function(&format!("host_sqrt_{}", bits), |bencher| {
            bencher.iter(|| black_box(&a).sqrt())
        });
    }
}

criterion_group!(benches, bench_div_mod, bench_to_decimal_str, bench_floor_sqrt);
criterion_main!(benches);
