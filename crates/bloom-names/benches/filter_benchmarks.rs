//! # Bloom Names Benchmarks
//!
//! Insert, lookup and encoding costs at the design load of 3,000 names.

use bloom_names::{hash_positions, BloomNames, NameFilterApi, NameFilterService, DESIGN_CAPACITY};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::distributions::Alphanumeric;
use rand::Rng;

fn random_names(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..24);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn bench_hash_positions(c: &mut Criterion) {
    let names = random_names(1_000);

    let mut group = c.benchmark_group("hash-positions");
    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("sha1-chunks", |b| {
        b.iter(|| {
            for name in &names {
                black_box(hash_positions(black_box(name)));
            }
        })
    });
    group.finish();
}

fn bench_insert_and_lookup(c: &mut Criterion) {
    let names = random_names(DESIGN_CAPACITY);
    let probes = random_names(DESIGN_CAPACITY);
    let filter: BloomNames = names.iter().collect();

    let mut group = c.benchmark_group("filter");
    group.throughput(Throughput::Elements(DESIGN_CAPACITY as u64));

    group.bench_function("add", |b| {
        b.iter(|| {
            let mut filter = BloomNames::new_empty();
            for name in &names {
                filter.add(black_box(name));
            }
            filter
        })
    });

    for (label, set) in [("contains-hit", &names), ("contains-miss", &probes)] {
        group.bench_with_input(BenchmarkId::new(label, set.len()), set, |b, set| {
            b.iter(|| set.iter().filter(|name| filter.contains(name)).count())
        });
    }

    group.bench_function("contains-constant-time", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|name| filter.contains_constant_time(name))
                .count()
        })
    });

    group.finish();
}

fn bench_shared_service(c: &mut Criterion) {
    let names = random_names(DESIGN_CAPACITY);
    let service = NameFilterService::new();
    for name in &names {
        let _ = service.add(name);
    }

    c.bench_function("service-contains", |b| {
        b.iter(|| names.iter().filter(|name| service.contains(name)).count())
    });
}

fn bench_encodings(c: &mut Criterion) {
    let filter: BloomNames = random_names(DESIGN_CAPACITY).iter().collect();
    let hex = filter.to_hex();
    let bytes = filter.to_le_bytes();

    let mut group = c.benchmark_group("encoding");
    group.bench_function("to-hex", |b| b.iter(|| black_box(&filter).to_hex()));
    group.bench_function("from-hex", |b| b.iter(|| BloomNames::from_hex(black_box(&hex))));
    group.bench_function("to-le-bytes", |b| b.iter(|| black_box(&filter).to_le_bytes()));
    group.bench_function("from-le-bytes", |b| {
        b.iter(|| BloomNames::from_le_bytes(black_box(&bytes)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_hash_positions,
    bench_insert_and_lookup,
    bench_shared_service,
    bench_encodings
);
criterion_main!(benches);
