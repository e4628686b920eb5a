//! Benchmarks for scoring and roadmap building.
//!
//! Run with: cargo bench --bench roadmap_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use maturity_roadmap::model::{Answer, AnswerValue, Grade};
use maturity_roadmap::roadmap::{RecommendationTable, RoadmapBuilder};
use maturity_roadmap::scoring::ScoreAggregator;
use maturity_roadmap::store::InMemoryAnswerStore;
use std::hint::black_box;

const GRADES: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

/// Generate a questionnaire with `dimensions` x `subs` sub-dimensions and
/// `questions` answers per sub-dimension for one assessment.
fn generate_answers(dimensions: usize, subs: usize, questions: usize) -> InMemoryAnswerStore {
    let mut store = InMemoryAnswerStore::new();
    for d in 0..dimensions {
        for s in 0..subs {
            for q in 0..questions {
                store.insert(Answer::new(
                    "bench-product",
                    "bench-user",
                    format!("d{d}-s{s}-q{q}"),
                    format!("Dimension {d}"),
                    format!("Sub {d}.{s}"),
                    AnswerValue::Grade(GRADES[(d + s + q) % GRADES.len()]),
                ));
            }
        }
    }
    store
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for questions in [5, 50, 500] {
        let aggregator = ScoreAggregator::new(generate_answers(5, 4, questions));
        group.bench_with_input(
            BenchmarkId::from_parameter(questions * 20),
            &aggregator,
            |b, aggregator| {
                b.iter(|| {
                    let _ = black_box(aggregator.aggregate("bench-product", "bench-user"));
                })
            },
        );
    }
    group.finish();
}

fn bench_overall_roadmap(c: &mut Criterion) {
    let builder = RoadmapBuilder::new(generate_answers(5, 4, 10), RecommendationTable::builtin());

    c.bench_function("overall_roadmap_200_answers", |b| {
        b.iter(|| {
            let _ = black_box(builder.build_overall_roadmap("bench-product", "bench-user"));
        })
    });
}

fn bench_fallback_roadmap(c: &mut Criterion) {
    let builder = RoadmapBuilder::new(generate_answers(10, 10, 5), RecommendationTable::new());

    c.bench_function("fallback_roadmap_100_subs", |b| {
        b.iter(|| {
            let _ = black_box(builder.build_subdimension_roadmap("bench-product", "bench-user"));
        })
    });
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_overall_roadmap,
    bench_fallback_roadmap
);
criterion_main!(benches);
