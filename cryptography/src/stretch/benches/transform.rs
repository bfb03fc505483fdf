use criterion::{criterion_group, Criterion};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use stretchy_cryptography::stretch::{stretch, unstretch, Stretch};

fn benchmark_transform(c: &mut Criterion) {
    let mut sampler = StdRng::seed_from_u64(0);
    let mut digest = [0u8; 32];
    sampler.fill_bytes(&mut digest);
    for value in 1..=4 {
        let factor = Stretch::new(value).unwrap();
        c.bench_function(&format!("{}/stretch={}", module_path!(), value), |b| {
            b.iter(|| stretch(&digest, factor).unwrap());
        });

        let stretched = stretch(&digest, factor).unwrap();
        c.bench_function(&format!("{}/unstretch={}", module_path!(), value), |b| {
            b.iter(|| unstretch(&stretched, factor).unwrap());
        });
    }
}

criterion_group!(benches, benchmark_transform);
