//! Benchmarks for mesh-io operations.
//!
//! Run with: cargo bench -p mesh-io
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-io -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-io -- --baseline main

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_io::{load_obj, read_obj, save_obj, write_obj};
use mesh_types::octahedron_sphere;
use tempfile::tempdir;

// =============================================================================
// I/O Benchmarks
// =============================================================================

fn bench_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("OBJ");
    let temp_dir = tempdir().expect("failed to create temp dir");

    for level in [3, 5] {
        let sphere = octahedron_sphere(1.0, level);
        let path = temp_dir.path().join(format!("bench_sphere_{level}.obj"));
        save_obj(&sphere, &path).expect("failed to save OBJ");

        let mut text = Vec::new();
        write_obj(&sphere, &mut text).expect("failed to render OBJ");

        group.throughput(Throughput::Elements(sphere.vertices.len() as u64));

        group.bench_with_input(BenchmarkId::new("load", level), &path, |b, path| {
            b.iter(|| load_obj(black_box(path)));
        });

        group.bench_with_input(BenchmarkId::new("parse", level), &text, |b, text| {
            b.iter(|| read_obj(black_box(text.as_slice())));
        });

        let out = temp_dir.path().join(format!("bench_out_{level}.obj"));
        group.bench_with_input(BenchmarkId::new("save", level), &sphere, |b, sphere| {
            b.iter(|| save_obj(black_box(sphere), black_box(&out)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_io);
criterion_main!(benches);
