//! Benchmark for the composition engine.
//!
//! Compares `Trans` operations against the equivalent hand-written nested
//! traversal, which bounds the cost of going through witnesses.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambars_trans::num::Additive;
use lambars_trans::persistent::PersistentStack;
use lambars_trans::trans::Trans;
use lambars_trans::witness::{OptionW, StackW, VecW};
use std::hint::black_box;

type VecOption = Trans<VecW, OptionW>;
type OptionVec = Trans<OptionW, VecW>;

fn nested_options(size: usize) -> Vec<Option<i64>> {
    (0..size as i64)
        .map(|index| (index % 3 != 0).then_some(index))
        .collect()
}

// =============================================================================
// Bind / Filter
// =============================================================================

fn benchmark_vec_option_bind(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("vec_option_bind");

    for size in [100, 1_000, 10_000] {
        let nested = nested_options(size);

        group.bench_with_input(BenchmarkId::new("trans", size), &nested, |bencher, nested| {
            bencher.iter(|| {
                let result =
                    VecOption::bind(black_box(nested.clone()), |value| value.checked_mul(2));
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("hand_written", size), &nested, |bencher, nested| {
            bencher.iter(|| {
                let result: Vec<Option<i64>> = black_box(nested.clone())
                    .into_iter()
                    .map(|inner| inner.and_then(|value| value.checked_mul(2)))
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn benchmark_vec_option_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("vec_option_filter");

    for size in [100, 1_000, 10_000] {
        let nested = nested_options(size);

        group.bench_with_input(BenchmarkId::new("trans", size), &nested, |bencher, nested| {
            bencher.iter(|| {
                let result = VecOption::filter(black_box(nested.clone()), |value| value % 2 == 0);
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Fold family
// =============================================================================

fn benchmark_fold_family(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold_family");
    let nested = nested_options(10_000);
    let optional_list: Option<Vec<i64>> = Some((0..10_000).collect());

    group.bench_function("vec_option_sum", |bencher| {
        bencher.iter(|| black_box(VecOption::sum::<Additive, _>(black_box(nested.clone()))));
    });

    group.bench_function("vec_option_count", |bencher| {
        bencher.iter(|| black_box(VecOption::count(black_box(nested.clone()))));
    });

    group.bench_function("option_vec_exists", |bencher| {
        bencher.iter(|| {
            black_box(OptionVec::exists(black_box(optional_list.clone()), |value| {
                *value == 9_999
            }))
        });
    });

    group.finish();
}

// =============================================================================
// Persistent stack outer layer
// =============================================================================

fn benchmark_stack_option_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stack_option_map");

    for size in [100, 1_000] {
        let nested: PersistentStack<Option<i64>> = nested_options(size).into_iter().collect();

        group.bench_with_input(BenchmarkId::new("trans", size), &nested, |bencher, nested| {
            bencher.iter(|| {
                let result =
                    Trans::<StackW, OptionW>::map(black_box(nested.clone()), |value| value + 1);
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_vec_option_bind,
    benchmark_vec_option_filter,
    benchmark_fold_family,
    benchmark_stack_option_map
);

criterion_main!(benches);
