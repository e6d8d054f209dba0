use salsarng::rng::salsa::{Iv, Key, Salsa, Seed};

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_next_u64(c: &mut Criterion) {
    let mut rng = Salsa::from_seed(&Seed([0; 10]));

    c.bench_function("salsa20/8 next_u64", |b| b.iter(|| black_box(rng.next_u64())));
}

pub fn bench_encrypt(c: &mut Criterion) {
    let mut rng = Salsa::from_key_iv(&Key::from_bytes(&[0x42; 32]), &Iv::default());
    let msg = [0u8; 4096];
    let mut cipher = [0u8; 4096];

    let mut group = c.benchmark_group("salsa20/8 encrypt");
    group.throughput(Throughput::Bytes(msg.len() as u64));
    group.bench_function("4 KiB", |b| {
        b.iter(|| rng.encrypt(black_box(&msg), &mut cipher))
    });
    group.finish();
}

criterion_group!(benches, bench_next_u64, bench_encrypt);
criterion_main!(benches);
