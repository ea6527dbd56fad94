//! Criterion benchmarks for the search core and harness; see `benches/`.
