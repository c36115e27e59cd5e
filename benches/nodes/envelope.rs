//! Benchmarks for trigger-driven envelopes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pullgraph::{
    dsp::AdsrParams,
    graph::{Adsr, Decay, Trigger},
    Graph, GraphConfig,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

/// A press every 250ms for about an hour, so the cursor never runs dry.
fn presses() -> Vec<f64> {
    (0..14_400).map(|i| i as f64 * 0.25).collect()
}

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("nodes/envelope");

    for &size in BLOCK_SIZES {
        let mut graph = Graph::new(GraphConfig::new(SAMPLE_RATE, size)).unwrap();
        let press = graph.add(Trigger::from_times(presses()).unwrap()).unwrap();
        let release_times = presses().into_iter().map(|t| t + 0.1).collect();
        let release = graph
            .add(Trigger::from_times(release_times).unwrap())
            .unwrap();
        let adsr = graph
            .add(Adsr::with_release(
                press,
                release,
                AdsrParams::new(0.01, 0.05, 0.6, 0.1),
            ))
            .unwrap();
        let mut tick = 0;

        group.bench_with_input(BenchmarkId::new("adsr", size), &size, |b, _| {
            b.iter(|| {
                black_box(graph.get_output(adsr, tick).unwrap());
                tick += size as u64;
            })
        });

        let mut graph = Graph::new(GraphConfig::new(SAMPLE_RATE, size)).unwrap();
        let press = graph.add(Trigger::from_times(presses()).unwrap()).unwrap();
        let decay = graph.add(Decay::quadratic(press, 0.2)).unwrap();
        let mut tick = 0;

        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| {
                black_box(graph.get_output(decay, tick).unwrap());
                tick += size as u64;
            })
        });
    }

    group.finish();
}
