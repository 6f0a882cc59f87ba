#![allow(unused_mut)]

use gho::prelude::*;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn benchmark_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("Vector");

    for size in [16, 256, 4096].iter() {
        group.bench_with_input(BenchmarkId::new("add_default_growth", size), size, |b, &size| {
            b.iter(|| {
                let mut vector = Vector::<i64>::new();
                for i in 0..size {
                    vector.add(black_box(i));
                }
                black_box(vector)
            });
        });

        group.bench_with_input(BenchmarkId::new("add_compact_growth", size), size, |b, &size| {
            b.iter(|| {
                let mut vector = Vector::<i64, CompactConfig>::with_config();
                for i in 0..size {
                    vector.add(black_box(i));
                }
                black_box(vector)
            });
        });

        group.bench_with_input(BenchmarkId::new("print_and_read", size), size, |b, &size| {
            let vector: Vector<i64> = (0..size).collect();
            b.iter(|| {
                let text = vector.to_gho_string();
                let (back, _) = Vector::<i64>::sread(text.as_str()).unwrap();
                black_box(back)
            });
        });
    }
    group.finish();
}

fn benchmark_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Matrix");

    for size in [4, 32, 128].iter() {
        group.bench_with_input(BenchmarkId::new("add_col_before", size), size, |b, &size| {
            let matrix = Matrix::<i32>::with_size(size, size);
            b.iter(|| {
                let mut m = matrix.clone();
                m.add_col_before(black_box(0)).unwrap();
                black_box(m)
            });
        });

        group.bench_with_input(BenchmarkId::new("cell_operands", size), size, |b, &size| {
            let mut matrix = Matrix::<i32, WrappingConfig>::with_size(size, size);
            b.iter(|| {
                for i in 0..size {
                    for j in 0..size {
                        matrix.operand_at(i, j).unwrap().increment().unwrap();
                    }
                }
            });
        });
    }
    group.finish();
}

fn benchmark_any(c: &mut Criterion) {
    let mut group = c.benchmark_group("Any");

    group.bench_function("clone_string", |b| {
        let any = Any::from_value(GhoString::from("a reasonably long string value"));
        b.iter(|| black_box(any.clone()));
    });

    group.bench_function("equal_vector", |b| {
        let vector: Vector<i32> = (0..64).collect();
        let (a, c) = (vector.to_any(), vector.to_any());
        b.iter(|| black_box(a.equal(black_box(&c))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_vector, benchmark_matrix, benchmark_any);
criterion_main!(benches);
