use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qkem_api::Kem;
use qkem_kem::{MlKem1024, MlKem512, MlKem768};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

macro_rules! bench_params {
    ($c:expr, $kem:ty, $label:literal) => {{
        let mut rng = ChaChaRng::seed_from_u64(42);

        $c.bench_function(concat!($label, "/keypair"), |b| {
            b.iter(|| <$kem>::keypair(&mut rng).unwrap())
        });

        let (pk, sk) = <$kem>::keypair(&mut rng).unwrap();
        $c.bench_function(concat!($label, "/encapsulate"), |b| {
            b.iter(|| <$kem>::encapsulate(&mut rng, black_box(&pk)).unwrap())
        });

        let (ct, _) = <$kem>::encapsulate(&mut rng, &pk).unwrap();
        $c.bench_function(concat!($label, "/decapsulate"), |b| {
            b.iter(|| <$kem>::decapsulate(black_box(&sk), black_box(&ct)).unwrap())
        });
    }};
}

fn bench_mlkem(c: &mut Criterion) {
    bench_params!(c, MlKem512, "mlkem512");
    bench_params!(c, MlKem768, "mlkem768");
    bench_params!(c, MlKem1024, "mlkem1024");
}

criterion_group!(benches, bench_mlkem);
criterion_main!(benches);
