//! Pagination benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use pageturn_core::{Chapter, Paginator};

fn sample_chapters() -> Vec<Chapter> {
    (0..32)
        .map(|i| {
            let body = (0..40)
                .map(|p| format!("Paragraph {p} of chapter {i}. ").repeat(4))
                .collect::<Vec<_>>()
                .join("\n\n");
            Chapter::new(i, format!("第 {} 章", i + 1), body)
        })
        .collect()
}

fn pagination_benchmark(c: &mut Criterion) {
    let chapters = sample_chapters();
    let paginator = Paginator::new();

    c.bench_function("paginate_32_chapters", |b| {
        b.iter(|| std::hint::black_box(paginator.paginate(&chapters)))
    });
}

criterion_group!(benches, pagination_benchmark);
criterion_main!(benches);
