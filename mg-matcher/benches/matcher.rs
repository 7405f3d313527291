use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use mg_matcher::matcher::LineMatcher;

pub fn criterion_benchmark(c: &mut Criterion) {
    let line = "bcdfghjklmnpqrstvwxyz bcdfghjklmnpqrstvwxyz o";
    let matcher = LineMatcher::builder("[aeiou]").build();
    assert!(matcher.is_match(line));
    c.bench_function("bracket_class_scan", |b| {
        b.iter(|| matcher.is_match(black_box(line)))
    });

    let matcher = LineMatcher::builder("^bcd").build();
    assert!(matcher.is_match(line));
    c.bench_function("start_anchor", |b| {
        b.iter(|| matcher.is_match(black_box(line)))
    });

    let line = "visit https://example.com for details";
    let matcher = LineMatcher::builder("(http|https)://").build();
    assert!(matcher.is_match(line));
    c.bench_function("alternation", |b| {
        b.iter(|| matcher.is_match(black_box(line)))
    });

    // Greedy run followed by forced backtracking.
    let line = "xxxxxxxxxxaaaaaaaaaaaaaaaaaaaab";
    let matcher = LineMatcher::builder("a+ab").build();
    assert!(matcher.is_match(line));
    c.bench_function("plus_backtrack", |b| {
        b.iter(|| matcher.is_match(black_box(line)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
