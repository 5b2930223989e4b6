//! Latency benchmarks for the local (network-free) sentiment stages
//!
//! Run with: cargo bench -p pangsent-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio::runtime::Runtime;

use pangsent_classifiers::{
    FallbackChain, LexicalPolarityStrategy, LocalLexicon, OverrideMatcher, PolarityScorer,
    SentimentStrategy,
};
use std::sync::Arc;

const CASES: &[(&str, &str)] = &[
    ("expression", "maliket ak ed serbisyo yo"),
    ("word", "The clerk was maong and quick"),
    ("english_positive", "The service was excellent and the staff were wonderful"),
    ("english_no_cues", "We came in the morning and left after lunch"),
    (
        "long_mixed",
        "Salamat ed amin, but the queue in the second floor was slow and the aircon was not working. \
         The guard was friendly though, and the cashier explained everything twice.",
    ),
];

/// Expression table then word table
fn benchmark_lexicon(c: &mut Criterion) {
    let lexicon = LocalLexicon::builtin().expect("Failed to build lexicon");

    let mut group = c.benchmark_group("Local_Lexicon");
    group.sample_size(100);

    for (name, text) in CASES {
        group.bench_with_input(BenchmarkId::new("detect", name), text, |b, text| {
            b.iter(|| lexicon.detect(black_box(text)));
        });
    }

    group.finish();
}

fn benchmark_overrides(c: &mut Criterion) {
    let overrides = OverrideMatcher::builtin().expect("Failed to build override matcher");

    let mut group = c.benchmark_group("Override_Phrases");
    for (name, text) in CASES {
        group.bench_with_input(BenchmarkId::new("check", name), text, |b, text| {
            b.iter(|| overrides.check(black_box(text)).is_some());
        });
    }
    group.finish();
}

fn benchmark_polarity(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let scorer = PolarityScorer::new();
    let strategy = LexicalPolarityStrategy::default();

    let mut group = c.benchmark_group("Lexical_Polarity");
    for (name, text) in CASES {
        group.bench_with_input(BenchmarkId::new("score", name), text, |b, text| {
            b.iter(|| scorer.score(black_box(text)));
        });
    }

    group.bench_function("strategy_try_classify", |b| {
        b.iter(|| {
            rt.block_on(async {
                strategy
                    .try_classify(black_box("not very good, but friendly"))
                    .await
                    .unwrap()
            })
        });
    });
    group.finish();
}

/// Offline chain: polarity then keyword count
fn benchmark_chain(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let chain =
        FallbackChain::new().with_strategy(Arc::new(LexicalPolarityStrategy::default()));

    let mut group = c.benchmark_group("Fallback_Chain");
    group.sample_size(100);

    group.bench_function("polarity_decides", |b| {
        b.iter(|| rt.block_on(chain.classify(black_box("excellent and wonderful"))));
    });

    group.bench_function("falls_to_keyword_count", |b| {
        b.iter(|| rt.block_on(chain.classify(black_box("aaa bbb ccc"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_lexicon,
    benchmark_overrides,
    benchmark_polarity,
    benchmark_chain
);
criterion_main!(benches);
