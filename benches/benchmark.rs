//! Benchmarks for textsift

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use textsift::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that gives systems
the ability to learn from experience without explicit programming. Machine
learning focuses on computer programs that access data and learn from it.

The process of learning begins with observations or data, such as examples
or instruction, to look for patterns in data. The primary aim is to let
computers learn without human intervention.

Deep learning is a subset of machine learning that uses neural networks.
Neural networks learn representations of data. Deep learning has been applied
to computer vision, speech recognition and language processing.

Natural language processing is a field of linguistics and computer science
concerned with interactions between computers and human language. Key
applications include sentiment analysis, machine translation and text
summarization.
"#;

fn benchmark_analysis(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_TEXT), false))
    });

    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text), true))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let parsed = Tokenizer::new().tokenize(SAMPLE_TEXT, false);
    let similarity = DefaultSimilarity::new();

    c.bench_function("word_graph_build", |b| {
        b.iter(|| WordGraph::from_tokens(black_box(&parsed.tokens), &NounVerbFilter, 2))
    });

    c.bench_function("sentence_graph_build", |b| {
        b.iter(|| {
            SentenceGraph::build(
                black_box(&parsed.sentences),
                &similarity,
                &NounVerbFilter,
                parsed.sentences.first(),
                DEFAULT_THRESHOLD,
            )
        })
    });

    // Small inputs build rows sequentially, large ones in parallel
    let mut group = c.benchmark_group("sentence_graph_by_size");
    for size in [1, 10, 40].iter() {
        let large = Tokenizer::new().tokenize(&SAMPLE_TEXT.repeat(*size), false);
        group.bench_with_input(
            BenchmarkId::from_parameter(large.sentences.len()),
            &large,
            |b, large| {
                b.iter(|| {
                    SentenceGraph::build(
                        black_box(&large.sentences),
                        &similarity,
                        &NounVerbFilter,
                        None,
                        DEFAULT_THRESHOLD,
                    )
                })
            },
        );
    }
    group.finish();
}

fn benchmark_ranking(c: &mut Criterion) {
    let parsed = Tokenizer::new().tokenize(SAMPLE_TEXT, false);
    let sentence_graph = SentenceGraph::build(
        &parsed.sentences,
        &default_similarity,
        &NounVerbFilter,
        parsed.sentences.first(),
        DEFAULT_THRESHOLD,
    );
    let word_graph = WordGraph::from_tokens(&parsed.tokens, &NounVerbFilter, 2);

    let mut group = c.benchmark_group("biased_pagerank_iterations");
    for iterations in [5, 15, 50].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            iterations,
            |b, &iterations| {
                b.iter(|| {
                    BiasedPageRank::new()
                        .with_max_iterations(iterations)
                        .run(black_box(&sentence_graph))
                })
            },
        );
    }
    group.finish();

    c.bench_function("keyword_pagerank", |b| {
        b.iter(|| KeywordPageRank::new().run(black_box(&word_graph)))
    });
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("summarize", size), &text, |b, text| {
            b.iter(|| summarize(black_box(text), 3))
        });

        group.bench_with_input(BenchmarkId::new("highlight", size), &text, |b, text| {
            b.iter(|| highlight(black_box(text), Some(10), true))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_analysis,
    benchmark_graph_building,
    benchmark_ranking,
    benchmark_full_pipeline
);
criterion_main!(benches);
