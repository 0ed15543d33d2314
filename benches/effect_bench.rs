//! Benchmark for the effect containers.
//!
//! Measures the cost of building and triggering IO and Async chains, and of
//! a short-circuiting `IO<Either>` pipeline.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funcy::control::Either;
use funcy::effect::{Async, IO, bridge};
use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

// =============================================================================
// 1. IO Chains
// =============================================================================

fn benchmark_io_fmap_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_fmap_chain");

    for chain_length in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chain_length),
            &chain_length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut io = IO::pure(black_box(1_i64));
                    for _ in 0..length {
                        io = io.fmap(|x| x + 1);
                    }
                    black_box(io.run_unsafe())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_io_retrigger(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_retrigger");

    let mut io = IO::pure(0_i64);
    for _ in 0..10 {
        io = io.flat_map(|x| IO::pure(x + 1));
    }

    group.bench_function("prebuilt_flat_map_10", |bencher| {
        bencher.iter(|| black_box(io.run_unsafe()));
    });

    group.finish();
}

// =============================================================================
// 2. Async Chains
// =============================================================================

fn benchmark_async_flat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("async_flat_map_chain");

    for chain_length in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chain_length),
            &chain_length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut computation = Async::pure(black_box(1_i64));
                    for _ in 0..length {
                        computation = computation.flat_map(|x| Async::pure(x + 1));
                    }
                    let result = Rc::new(Cell::new(0));
                    let sink = Rc::clone(&result);
                    computation.run_async(move |value| sink.set(value));
                    black_box(result.get())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_async_deferred_resolution(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("async_deferred");

    group.bench_function("resolve_through_fmap_5", |bencher| {
        bencher.iter(|| {
            let (source, resolver) = Async::<i64>::deferred();
            let mut computation = source;
            for _ in 0..5 {
                computation = computation.fmap(|x| x * 2);
            }
            computation.run_async(|value| {
                black_box(value);
            });
            black_box(resolver.resolve(black_box(3)))
        });
    });

    group.finish();
}

// =============================================================================
// 3. IO<Either> Pipelines
// =============================================================================

fn benchmark_io_either_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_either_pipeline");

    for (name, raw) in [("success", 512_u16), ("short_circuit", 2_u16)] {
        let read = bridge::lift_io_to_either(
            IO::pure(raw),
            |_| "Sensor read too low".to_string(),
            |value| *value < 10,
        );
        let pipeline = bridge::flat_map_io_either(read, |value| {
            IO::pure(Either::<f64, String>::right(f64::from(value) * 3.3 / 1023.0))
        });

        group.bench_function(name, |bencher| {
            bencher.iter(|| black_box(pipeline.run_unsafe()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_io_fmap_chain,
    benchmark_io_retrigger,
    benchmark_async_flat_map_chain,
    benchmark_async_deferred_resolution,
    benchmark_io_either_pipeline,
);

criterion_main!(benches);
