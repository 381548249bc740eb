use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes128_core::{Aes128, Aes128Key, KeySchedule};

fn bench_key_schedule(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    c.bench_function("expand_key", |b| {
        b.iter(|| KeySchedule::expand(&key));
    });
}

fn bench_encrypt(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Aes128::new(&Aes128Key::from(key_bytes));

    let mut group = c.benchmark_group("encrypt");
    group.bench_function("block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| cipher.encrypt_block(&block));
    });

    let mut data = vec![0u8; 64 * 1024];
    rng.fill_bytes(&mut data);
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("stream_64k", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(data.len() + 16);
            cipher.encrypt_stream(&data[..], &mut out).unwrap();
            out
        });
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_encrypt);
criterion_main!(benches);
