use coldrand::baseline::{ByteSwap, Lcg, Xorshift};
use coldrand::{HkdfPrng, MonolithicPrng, OnlinePrng, SeedlessPrng};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::RngCore;

fn refresh_32(c: &mut Criterion) {
    let mut entropy = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut entropy);

    let mut group = c.benchmark_group("refresh 32-byte entropy");

    let mut prng = MonolithicPrng::new();
    group.bench_function("monolithic", |bench| bench.iter(|| prng.refresh(black_box(&entropy))));

    let mut prng = OnlinePrng::new();
    group.bench_function("online", |bench| bench.iter(|| prng.refresh(black_box(&entropy))));

    let mut prng = HkdfPrng::new();
    group.bench_function("hkdf", |bench| bench.iter(|| prng.refresh(black_box(&entropy))));

    let mut prng = Lcg::new();
    group.bench_function("lcg", |bench| bench.iter(|| prng.refresh(black_box(&entropy))));

    let mut prng = ByteSwap::new();
    group.bench_function("byte-swap", |bench| bench.iter(|| prng.refresh(black_box(&entropy))));

    let mut prng = Xorshift::new();
    group.bench_function("xorshift", |bench| bench.iter(|| prng.refresh(black_box(&entropy))));

    group.finish();
}

fn next_1kib(c: &mut Criterion) {
    const DRAW: usize = 1024;

    let mut entropy = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut entropy);

    let mut group = c.benchmark_group("next 1 KiB");
    group.throughput(Throughput::Bytes(DRAW as u64));

    let mut prng = MonolithicPrng::new();
    prng.refresh(&entropy);
    group.bench_function("monolithic", |bench| {
        bench.iter(|| prng.next(black_box(DRAW)).unwrap())
    });

    let mut prng = OnlinePrng::new();
    prng.refresh(&entropy);
    group.bench_function("online", |bench| bench.iter(|| prng.next(black_box(DRAW)).unwrap()));

    let mut prng = HkdfPrng::new();
    prng.refresh(&entropy);
    group.bench_function("hkdf", |bench| bench.iter(|| prng.next(black_box(DRAW)).unwrap()));

    let mut prng = Lcg::new();
    prng.refresh(&entropy);
    group.bench_function("lcg", |bench| bench.iter(|| prng.next(black_box(DRAW)).unwrap()));

    let mut prng = ByteSwap::new();
    prng.refresh(&entropy);
    group.bench_function("byte-swap", |bench| {
        bench.iter(|| prng.next(black_box(DRAW)).unwrap())
    });

    let mut prng = Xorshift::new();
    prng.refresh(&entropy);
    group.bench_function("xorshift", |bench| {
        bench.iter(|| prng.next(black_box(DRAW)).unwrap())
    });

    group.finish();
}

criterion_group!(prng_group, refresh_32, next_1kib);
criterion_main!(prng_group);
