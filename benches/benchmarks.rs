//! Benchmarks for the counting core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_counter::count_words;

fn bench_empty(c: &mut Criterion) {
    c.bench_function("count_empty", |b| {
        b.iter(|| count_words(black_box("")));
    });
}

fn bench_short_sentence(c: &mut Criterion) {
    c.bench_function("count_short_sentence", |b| {
        b.iter(|| count_words(black_box("Hello. How are you today?")));
    });
}

fn bench_blog_post(c: &mut Criterion) {
    // Roughly the size of a long-form post typed into the field.
    let post = "The quick brown fox jumps over the lazy dog.\n".repeat(500);

    c.bench_function("count_blog_post", |b| {
        b.iter(|| count_words(black_box(&post)));
    });
}

fn bench_separator_heavy(c: &mut Criterion) {
    // Worst case for the filter step: every other token is empty.
    let noisy = "a. b? c! ".repeat(1000);

    c.bench_function("count_separator_heavy", |b| {
        b.iter(|| count_words(black_box(&noisy)));
    });
}

criterion_group!(
    benches,
    bench_empty,
    bench_short_sentence,
    bench_blog_post,
    bench_separator_heavy
);
criterion_main!(benches);
