//! Benchmarks for graph nodes and real-world patches.
//!
//! Run with: cargo bench
//!
//! Every benchmark pulls consecutive blocks at increasing ticks, the way an
//! audio callback does, so caching never short-circuits the work.
//!
//! Reference deadlines at 48kHz sample rate:
//!   - 64 samples  = 1.33ms
//!   - 128 samples = 2.67ms
//!   - 256 samples = 5.33ms
//!   - 512 samples = 10.67ms
//!
//! Benchmark groups:
//!   - nodes/*      Single nodes fed by constants
//!   - scenarios/*  Voice chains and multi-voice mixes

use criterion::{criterion_group, criterion_main};

mod nodes;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

pub const SAMPLE_RATE: f32 = 48_000.0;

criterion_group!(
    benches,
    nodes::bench_oscillator,
    nodes::bench_filter,
    nodes::bench_envelope,
    scenarios::bench_voices,
    scenarios::bench_mix,
);
criterion_main!(benches);
