//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package solara-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use solara_lex::Lexer;
use solara_util::CompilerContext;

fn lexer_token_count(source: &str) -> usize {
    let mut ctx = CompilerContext::default();
    Lexer::with_source(&mut ctx, source).count()
}

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "pub module demo; const x = 42; if (x >= 0x10) { return x; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("module_header", |b| {
        b.iter(|| lexer_token_count(black_box("pub module demo;")))
    });

    group.bench_function("mixed_statement", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let unit = r#"
        /* geometry helpers */
        struct Point {
            x: float,
            y: float,
        }

        // walk every point
        for (i = 0; i < count; i++) {
            if (points[i].x <= 0.5 && points[i].y != .25) {
                total += i << 2;
                continue;
            }
            switch (mode) { default: break; }
        }
        const label = "done\n";
    "#;
    let source = unit.repeat(64);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_units", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_comments(c: &mut Criterion) {
    let source = "// line comment\n/* block\ncomment */\n".repeat(256);

    c.bench_function("lexer_comments_only", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });
}

criterion_group!(
    benches,
    bench_lexer_simple,
    bench_lexer_program,
    bench_lexer_comments
);
criterion_main!(benches);
