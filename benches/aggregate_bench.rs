//! Benchmarks for the countydash filter/aggregate engine
//!
//! Run with: cargo bench

use countydash::dataset::{CaseRecord, Dataset};
use countydash::query::{aggregate, Selection};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// Synthetic dataset: `states` states x `counties` counties x `dates` dates
fn create_test_dataset(states: usize, counties: usize, dates: usize) -> Dataset {
    let mut records = Vec::with_capacity(states * counties * dates);

    for s in 0..states {
        for c in 0..counties {
            for d in 0..dates {
                records.push(CaseRecord::new(
                    format!("State {}", s),
                    format!("County {}", c),
                    format!("2020-03-{:02}", d + 1),
                    (s * c + d) as u64,
                    (d % 3) as u64,
                ));
            }
        }
    }

    Dataset::new(records)
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for (states, counties, dates) in [(5, 10, 10), (10, 50, 20), (50, 100, 30)] {
        let dataset = create_test_dataset(states, counties, dates);

        // Selection matching a slice of the table: 2 states, 5 counties, all dates
        let selection = Selection::new(
            (0..2).map(|s| format!("State {}", s)).collect(),
            (0..5).map(|c| format!("County {}", c)).collect(),
            (0..dates).map(|d| format!("2020-03-{:02}", d + 1)).collect(),
        );

        group.throughput(Throughput::Elements(dataset.len() as u64));

        group.bench_function(format!("filter_sum_{}", dataset.len()), |b| {
            b.iter(|| aggregate(black_box(&dataset), black_box(&selection)))
        });
    }

    group.finish();
}

fn bench_aggregate_sentinel(c: &mut Criterion) {
    let dataset = create_test_dataset(10, 50, 20);
    let incomplete = Selection::new(vec!["State 0".to_string()], vec![], vec![]);

    c.bench_function("aggregate_sentinel", |b| {
        b.iter(|| aggregate(black_box(&dataset), black_box(&incomplete)))
    });
}

criterion_group!(benches, bench_aggregate, bench_aggregate_sentinel);
criterion_main!(benches);
