//! Performance benchmarks for the text-heuristic pipeline.
//!
//! The enrichment pipeline runs inline on every inbound request, so
//! these benchmarks track the pure-CPU hot path: classification,
//! transcript extraction, summarization, and full record assembly.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use leadrelay_core::{
    build_outbound, classify, extract_caller_info, summarize_transcript, IntakeRecord, RealClock,
};

fn sample_transcript() -> String {
    let mut lines = vec![
        "Agent: Thank you for calling the firm, how can I help you today?".to_string(),
        "Caller: My name is David Glick".to_string(),
        "Caller: I was in a car accident last week and the insurance company stopped calling back."
            .to_string(),
    ];
    for _ in 0..20 {
        lines.push("Agent: I see, can you tell me a little more about that?".to_string());
        lines.push(
            "Caller: There was a lot of paperwork and the adjuster keeps changing the story."
                .to_string(),
        );
    }
    lines.push("Caller: you can reach me at 555 123 4567 or david at gmail dot com".to_string());
    lines.join("\n")
}

fn bench_classifier(c: &mut Criterion) {
    let descriptions = [
        "I was in a car accident",
        "arrested for DUI last night",
        "need help filing chapter 7",
        "question about my neighbor's fence",
        "",
    ];

    c.bench_function("classify", |b| {
        b.iter(|| {
            for description in &descriptions {
                black_box(classify(black_box(description)));
            }
        });
    });
}

fn bench_extraction(c: &mut Criterion) {
    let transcript = sample_transcript();

    c.bench_function("extract_caller_info", |b| {
        b.iter(|| black_box(extract_caller_info(black_box(&transcript))));
    });
}

fn bench_summarization(c: &mut Criterion) {
    let transcript = sample_transcript();

    c.bench_function("summarize_transcript", |b| {
        b.iter(|| black_box(summarize_transcript(black_box(&transcript), 200)));
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let record =
        IntakeRecord { transcript: sample_transcript(), ..IntakeRecord::default() };
    let clock = RealClock;

    c.bench_function("build_outbound", |b| {
        b.iter(|| black_box(build_outbound(black_box(&record), &clock)));
    });
}

criterion_group!(
    benches,
    bench_classifier,
    bench_extraction,
    bench_summarization,
    bench_full_pipeline
);
criterion_main!(benches);
