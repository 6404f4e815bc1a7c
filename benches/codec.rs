use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sgf_codec::{Property, SimpleText, Text, GM, SZ};

fn benchmark_encode_simple_text(c: &mut Criterion) {
    let raw = "The quick brown fox jumps over the lazy dog";

    c.bench_function("encode_simple_text", |b| {
        b.iter(|| SimpleText::new(black_box(raw)))
    });
}

fn benchmark_encode_formatted_text(c: &mut Criterion) {
    let raw = "line one\nline two with an escaped \\] bracket\\\nand a soft break";

    c.bench_function("encode_formatted_text", |b| {
        b.iter(|| Text::new(black_box(raw)))
    });
}

fn benchmark_encode_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_by_size");

    for size in [64, 512, 4096].iter() {
        let raw = "word word\tword\\\nword \\] ".repeat(size / 8);

        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| SimpleText::new(black_box(raw.as_str())))
        });
    }

    group.finish();
}

fn benchmark_deserialize_property(c: &mut Criterion) {
    c.bench_function("deserialize_game_type", |b| {
        b.iter(|| GM::deserialize(black_box(" GM[30]")))
    });

    c.bench_function("deserialize_board_size_pair", |b| {
        b.iter(|| SZ::deserialize(black_box("SZ[19:18]")))
    });
}

fn benchmark_serialize_property(c: &mut Criterion) {
    let board = SZ::rectangular(19, 18).unwrap();

    c.bench_function("serialize_board_size", |b| {
        b.iter(|| black_box(&board).serialize())
    });
}

criterion_group!(
    benches,
    benchmark_encode_simple_text,
    benchmark_encode_formatted_text,
    benchmark_encode_by_size,
    benchmark_deserialize_property,
    benchmark_serialize_property
);
criterion_main!(benches);
