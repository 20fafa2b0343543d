use criterion::{Criterion, black_box, criterion_group, criterion_main};
use md_repair::{PlaceholderProtector, repair_document};

/// A Javadoc-like fragment with literals, pre-existing markers and plain text.
fn sample_document(paragraphs: usize) -> String {
    let paragraph = "Send reports to team@example.org. Annotations such as @Override \
                     and @Deprecated appear inline, and {-at-} is written literally.\n\n";
    paragraph.repeat(paragraphs)
}

fn protect_benchmark(c: &mut Criterion) {
    let doc = sample_document(500);

    c.bench_function("protector::protect", |b| {
        b.iter(|| {
            let mut protector = PlaceholderProtector::new();
            black_box(protector.protect(black_box(&doc)));
        })
    });
}

fn restore_benchmark(c: &mut Criterion) {
    let doc = sample_document(500);
    let protected = PlaceholderProtector::new().protect(&doc);

    c.bench_function("protector::protect+restore", |b| {
        b.iter(|| {
            let mut protector = PlaceholderProtector::new();
            let protected = protector.protect(black_box(&doc));
            black_box(protector.restore(&protected));
        })
    });

    c.bench_function("protector::restore (underrun)", |b| {
        b.iter(|| {
            let mut protector = PlaceholderProtector::new();
            black_box(protector.restore(black_box(&protected)));
        })
    });
}

fn repair_document_benchmark(c: &mut Criterion) {
    let doc = sample_document(500);
    let parse = |s: &str| format!("<p>{s}</p>");

    c.bench_function("chain::repair_document", |b| {
        b.iter(|| black_box(repair_document(black_box(&doc), &parse)))
    });
}

criterion_group!(
    benches,
    protect_benchmark,
    restore_benchmark,
    repair_document_benchmark
);
criterion_main!(benches);
