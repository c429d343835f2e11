use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use outcome_rail::traits::ResultExt;
use outcome_rail::{ErrorKind, Outcome};
use std::hint::black_box;

pub fn bench_ensure(c: &mut Criterion) {
    c.bench_function("conversions/ensure_output_success", |b| {
        b.iter(|| black_box(Outcome::<u64>::ok(black_box(7)).ensure_output()))
    });

    c.bench_function("conversions/ensure_output_error", |b| {
        b.iter(|| {
            black_box(Outcome::<u64>::error_msg(ErrorKind::NetworkError, "reset").ensure_output())
        })
    });
}

pub fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("conversions/exception_round_trip", |b| {
        b.iter(|| {
            let raised = Outcome::<()>::error_msg(ErrorKind::NotFound, "X missing")
                .ensure_success()
                .err();
            black_box(raised.map(|err| err.to_outcome::<()>()))
        })
    });

    c.bench_function("conversions/result_ext_parse", |b| {
        b.iter(|| black_box(black_box("not-a-number").parse::<u32>().outcome(ErrorKind::NotValid)))
    });
}

criterion_group! {
    name = conversion_benches;
    config = configure_criterion();
    targets = bench_ensure, bench_round_trip
}
