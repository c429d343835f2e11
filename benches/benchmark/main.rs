use criterion::criterion_main;

mod common;
mod conversions;

criterion_main!(core::core_benches, conversions::conversion_benches);
