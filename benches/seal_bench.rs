use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crypto_box::aead::OsRng;
use crypto_box::SecretKey;
use ghvar::core::cipher::{seal_secret, Cipher, PublicKey, SealedBox};
use std::time::Duration;

/// Generate a payload of given size.
fn generate_payload(size: usize) -> String {
    "x".repeat(size)
}

fn keypair() -> (SecretKey, PublicKey) {
    let secret = SecretKey::generate(&mut OsRng);
    let public = PublicKey {
        key_id: "bench".to_string(),
        key: STANDARD.encode(secret.public_key().as_bytes()),
    };
    (secret, public)
}

/// Benchmark sealing a value the way the reconciler does.
fn bench_seal(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let (_, public) = keypair();
    // GitHub caps secret values at 48 KB
    let sizes = [32, 256, 1024, 4096, 49152];

    for size in sizes {
        let payload = generate_payload(size);
        group.throughput(Throughput::Bytes(size as u64));

        for base64 in [false, true] {
            let label = if base64 { "base64" } else { "raw" };
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}B", size)),
                &payload,
                |b, payload| {
                    b.iter(|| {
                        let sealed =
                            seal_secret(black_box(payload), base64, black_box(&public)).unwrap();
                        black_box(sealed);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark seal/unseal roundtrip.
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal_unseal");
    group.sample_size(50);

    let (secret, _) = keypair();
    let recipient = secret.public_key();

    for size in [32, 4096] {
        let payload = generate_payload(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("roundtrip", format!("{}B", size)),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let sealed = SealedBox
                        .encrypt(black_box(payload.as_bytes()), &recipient)
                        .unwrap();
                    let opened = SealedBox.decrypt(black_box(&sealed), &secret).unwrap();
                    black_box(opened);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_seal, bench_roundtrip);
criterion_main!(benches);
