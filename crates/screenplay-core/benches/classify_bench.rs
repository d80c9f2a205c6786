use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use screenplay_core::types::{DocumentInput, PageInput, Span};
use screenplay_core::{classify_document, ClassifierConfig};

fn span(text: &str, x: f32, y: f32) -> Span {
    Span {
        text: text.to_string(),
        x,
        y,
        width: 140.0,
        height: 12.0,
        font_size: None,
        font: None,
    }
}

/// A single scene: heading, two lines of action, a character/dialogue
/// exchange, and a parenthetical, repeated to build pages of varying size.
fn scene_spans(base_y: f32) -> Vec<Span> {
    vec![
        span("INT. KITCHEN - DAY", 72.0, base_y),
        span("John paces by the window, waiting.", 72.0, base_y + 20.0),
        span("He checks his watch again.", 72.0, base_y + 34.0),
        span("JOHN", 240.0, base_y + 56.0),
        span("(quietly)", 220.0, base_y + 70.0),
        span("She should have called by now.", 150.0, base_y + 84.0),
        span("CUT TO:", 450.0, base_y + 104.0),
    ]
}

fn document_with_pages(page_count: usize, scenes_per_page: usize) -> DocumentInput {
    let pages = (0..page_count)
        .map(|page_idx| {
            let mut text_items = Vec::new();
            for scene_idx in 0..scenes_per_page {
                text_items.extend(scene_spans(100.0 + scene_idx as f32 * 150.0));
            }
            PageInput {
                page_number: page_idx + 1,
                width: None,
                height: None,
                text_items,
            }
        })
        .collect();

    DocumentInput {
        pages,
        language: "eng".to_string(),
        total_pages: page_count,
    }
}

fn bench_classify_by_page_count(c: &mut Criterion) {
    let config = ClassifierConfig::default();
    let mut group = c.benchmark_group("classify_document/pages");

    for &page_count in &[1usize, 10, 50] {
        let document = document_with_pages(page_count, 4);
        group.bench_function(BenchmarkId::from_parameter(page_count), |b| {
            b.iter(|| black_box(classify_document(black_box(&document), black_box(&config)).unwrap()))
        });
    }

    group.finish();
}

fn bench_classify_by_scene_density(c: &mut Criterion) {
    let config = ClassifierConfig::default();
    let mut group = c.benchmark_group("classify_document/scenes_per_page");

    for &scenes_per_page in &[1usize, 8, 20] {
        let document = document_with_pages(1, scenes_per_page);
        group.bench_function(BenchmarkId::from_parameter(scenes_per_page), |b| {
            b.iter(|| black_box(classify_document(black_box(&document), black_box(&config)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    name = classify_benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_classify_by_page_count, bench_classify_by_scene_density
);
criterion_main!(classify_benches);
