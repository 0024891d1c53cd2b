#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use num_bigint::BigUint;
use num_traits::One;
use scale_codec::prelude::*;

const N: u64 = 10_000;

fn values() -> Vec<Compact<u64>> { (0..N).map(|i| Compact(i.wrapping_mul(0x9e37_79b9_7f4a_7c15) >> (i % 64))).collect() }

fn bench_classic(c: &mut Criterion) {
    let vs = values();
    let enc = encode_full(&vs).unwrap();
    c.bench_function(&format!("Encoding {} classic compact integers", N), move |b| {
        b.iter(|| encode_full(black_box(&vs)))
    });
    c.bench_function(&format!("Decoding {} classic compact integers", N), move |b| {
        b.iter(|| decode_full::<Vec<Compact<u64>>>(black_box(&enc)).unwrap())
    });
}

fn bench_jam(c: &mut Criterion) {
    let vs = values();
    let enc = encode_full_with::<Jam, _>(&vs).unwrap();
    c.bench_function(&format!("Encoding {} JAM compact integers", N), move |b| {
        b.iter(|| encode_full_with::<Jam, _>(black_box(&vs)))
    });
    c.bench_function(&format!("Decoding {} JAM compact integers", N), move |b| {
        b.iter(|| decode_full_with::<Jam, Vec<Compact<u64>>>(black_box(&enc)).unwrap())
    });
}

fn bench_big(c: &mut Criterion) {
    let max = Compact((BigUint::one() << 536) - BigUint::one());
    let enc = encode_full(&max).unwrap();
    c.bench_function("Encoding the largest compact integer", move |b| {
        b.iter(|| encode_full(black_box(&max)))
    });
    c.bench_function("Decoding the largest compact integer", move |b| {
        b.iter(|| decode_full::<Compact<BigUint>>(black_box(&enc)).unwrap())
    });
}

criterion_group!(benches, bench_classic, bench_jam, bench_big);
criterion_main!(benches);
