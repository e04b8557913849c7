//! Benchmarks for block absorption.
#![expect(missing_docs)]
#![allow(unused_crate_dependencies)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mirror256::processor::process_block;
use mirror256::{Block, Config, LayerState, Mirror256};

fn bench_process_block(c: &mut Criterion) {
    let state = LayerState::standard_default();
    let block = Block::from([0x42u8; 32]);

    c.bench_function("process_block/depth64", |b| {
        b.iter(|| process_block(black_box(&state), black_box(block)));
    });
}

fn bench_absorb(c: &mut Criterion) {
    let mut group = c.benchmark_group("absorb");
    for len in [19usize, 32, 1024] {
        let data = vec![0x61u8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| {
                let mut hasher = Mirror256::default();
                hasher.absorb(black_box(data));
                black_box(hasher.digest())
            });
        });
    }
    group.finish();
}

fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth");
    for depth in [1usize, 16, 64] {
        let config = Config::default().with_depth(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &config, |b, config| {
            b.iter(|| Mirror256::with_message(*config, black_box(b"This is the canary.")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_process_block, bench_absorb, bench_depth);
criterion_main!(benches);
