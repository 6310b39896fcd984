//! Benchmarks for primality testing, scalar multiplication and the ElGamal cycle
//! over a 256-bit field.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecc_elgamal::{
    decrypt, encrypt, generate_keys, generate_keys_with_config, is_probably_prime,
    random_curve_point, random_prime, scalar_multiply, KeyGenConfig, SamplingConfig,
    DEFAULT_MILLER_RABIN_ROUNDS,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_primality(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let prime = random_prime(256, &mut rng, &SamplingConfig::default()).unwrap();

    c.bench_function("miller_rabin_256", |b| {
        b.iter(|| is_probably_prime(black_box(&prime), DEFAULT_MILLER_RABIN_ROUNDS, &mut rng))
    });
}

fn bench_scalar_multiply(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let (public, private) = generate_keys(&mut rng).unwrap();

    c.bench_function("scalar_multiply_256", |b| {
        b.iter(|| scalar_multiply(&public.curve, black_box(private.scalar()), &public.g))
    });
}

fn bench_elgamal(c: &mut Criterion) {
    let mut group = c.benchmark_group("elgamal_256");
    group.sample_size(10);

    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let config = KeyGenConfig::default();

    group.bench_function("generate_keys", |b| {
        b.iter(|| generate_keys_with_config(black_box(&config), &mut rng).unwrap())
    });

    let (public, private) = generate_keys_with_config(&config, &mut rng).unwrap();
    let message = random_curve_point(&public.curve, &mut rng, &config.sampling).unwrap();

    group.bench_function("encrypt", |b| {
        b.iter(|| encrypt(black_box(&message), &public, &mut rng).unwrap())
    });

    let ciphertext = encrypt(&message, &public, &mut rng).unwrap();
    group.bench_function("decrypt", |b| {
        b.iter(|| decrypt(black_box(&ciphertext), &private, &public).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_primality, bench_scalar_multiply, bench_elgamal);
criterion_main!(benches);
