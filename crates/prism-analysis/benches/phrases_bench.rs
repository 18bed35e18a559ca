//! Phrase extraction throughput over a realistic inquiry corpus.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use prism_analysis::text::{clean_text, extract_phrases};

fn inquiry_corpus() -> Vec<String> {
    let samples = [
        "미니멀 컨셉 룩북 촬영 문의드립니다 스튜디오 반나절 진행 예정입니다",
        "Spring campaign video shoot, outdoor, full day with two models",
        "뷰티 화보 촬영 및 영상 제작 문의 립 제품 위주로 진행",
        "Lookbook and detail cuts for summer knitwear collection",
    ];
    (0..500)
        .map(|i| format!("{} {}", samples[i % samples.len()], i))
        .collect()
}

fn bench_phrase_extraction(c: &mut Criterion) {
    let corpus = inquiry_corpus();

    c.bench_function("clean_and_extract_phrases_500", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for text in &corpus {
                let cleaned = clean_text(black_box(text));
                total += extract_phrases(&cleaned).len();
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_phrase_extraction);
criterion_main!(benches);
