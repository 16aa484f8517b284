//! Payload store benchmarks.

use bindiff_bench::payload;
use bindiff_storage::{FileStore, InMemoryStore, PayloadStore, Slot, StoreConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;

/// Benchmark InMemoryStore slot writes.
fn bench_memory_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_put");

    for size in [256, 4096, 65536].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let store = InMemoryStore::new();
            let data = payload(size);

            b.iter(|| store.put(black_box("id"), Slot::Left, black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark FileStore slot writes, with and without fsync.
fn bench_file_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_put");
    group.sample_size(20);

    for sync in [false, true] {
        group.bench_with_input(BenchmarkId::new("sync", sync), &sync, |b, &sync| {
            let dir = TempDir::new().unwrap();
            let config = StoreConfig::default().sync_on_write(sync);
            let store = FileStore::open(dir.path(), config).unwrap();
            let data = payload(4096);

            b.iter(|| store.put(black_box("id"), Slot::Right, black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark FileStore reads.
fn bench_file_get(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path(), StoreConfig::default().sync_on_write(false)).unwrap();
    store.put("id", Slot::Left, &payload(4096)).unwrap();
    store.put("id", Slot::Right, &payload(4096)).unwrap();

    c.bench_function("file_get_4k", |b| {
        b.iter(|| black_box(store.get(black_box("id")).unwrap()));
    });
}

criterion_group!(benches, bench_memory_put, bench_file_put, bench_file_get);

criterion_main!(benches);
