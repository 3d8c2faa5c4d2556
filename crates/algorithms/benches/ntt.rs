use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qkem_algorithms::poly::sampling::sample_cbd;

fn bench_ntt(c: &mut Criterion) {
    let seed = [1u8; 32];
    let poly = sample_cbd(&seed, 0, 2);

    c.bench_function("poly/ntt", |b| {
        b.iter(|| black_box(poly.clone()).ntt())
    });

    let mut hat = poly.clone().ntt();
    hat.reduce();
    c.bench_function("poly/ntt_inverse", |b| {
        b.iter(|| black_box(hat.clone()).ntt_inverse())
    });

    let cache = hat.mulcache();
    c.bench_function("poly/basemul_cached", |b| {
        b.iter(|| hat.basemul_cached(black_box(&hat), &cache))
    });
}

fn bench_sampling(c: &mut Criterion) {
    let seed = [2u8; 32];

    c.bench_function("sampling/cbd_eta2", |b| {
        b.iter(|| sample_cbd(black_box(&seed), 0, 2))
    });

    c.bench_function("sampling/uniform", |b| {
        b.iter(|| {
            let mut reader = qkem_algorithms::hash::xof(black_box(&seed), 0, 0);
            qkem_algorithms::poly::sampling::sample_uniform(&mut reader)
        })
    });
}

criterion_group!(benches, bench_ntt, bench_sampling);
criterion_main!(benches);
