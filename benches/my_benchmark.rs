use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phrase_sniffer::extract_top_phrases;

fn benchmark_extract_top_phrases(c: &mut Criterion) {
    let texts = vec![
        "The white rabbit ran, and the white rabbit hid. The brown fox watched \
         the white rabbit run past the hedge while the brown fox waited."
            .to_string(),
        "A second document keeps the counting honest: the white rabbit appears \
         here too, and the white rabbit keeps on running."
            .to_string(),
    ];

    c.bench_function("extract_top_phrases", |b| {
        b.iter(|| extract_top_phrases(black_box(&texts), black_box(100)))
    });
}

criterion_group!(benches, benchmark_extract_top_phrases);
criterion_main!(benches);
