//! Benchmarks for the Kauffman bracket state sum.
//!
//! The bracket enumerates `2^C` smoothing states, so these establish the
//! practical crossing-count ceiling and measure the parallel fan-out.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knotwork::prelude::*;

fn figure8() -> Diagram {
    Diagram::from_flat_code(&[1, 6, 2, 7, 3, 1, 4, 8, 5, 2, 6, 3, 7, 5, 8, 4])
        .expect("figure-eight code groups into crossings")
}

/// Benchmarks the 16-state sum of the figure-eight knot.
fn bench_bracket_figure8(c: &mut Criterion) {
    let d = figure8();
    c.bench_function("bracket_figure8", |b| {
        b.iter(|| kauffman_bracket(black_box(&d)));
    });
}

/// Benchmarks a 64-state sum: the figure-eight after one poke.
fn bench_bracket_poked_figure8(c: &mut Criterion) {
    let poked = poke(&figure8(), 2, 5).expect("edges 2 and 5 are cofacial");
    c.bench_function("bracket_poked_figure8", |b| {
        b.iter(|| kauffman_bracket(black_box(&poked)));
    });
}

/// Benchmarks the 8192-state sum of the Ochiai unknot, the largest diagram
/// the test suite touches.
fn bench_bracket_ochiai(c: &mut Criterion) {
    let d = ochiai_unknot();
    c.bench_function("bracket_ochiai_unknot", |b| {
        b.iter(|| kauffman_bracket(black_box(&d)));
    });
}

/// Benchmarks the Jones pipeline end to end on the figure-eight.
fn bench_jones_figure8(c: &mut Criterion) {
    let d = figure8();
    c.bench_function("jones_figure8", |b| {
        b.iter(|| jones_polynomial(black_box(&d)));
    });
}

criterion_group!(
    benches,
    bench_bracket_figure8,
    bench_bracket_poked_figure8,
    bench_bracket_ochiai,
    bench_jones_figure8
);
criterion_main!(benches);
