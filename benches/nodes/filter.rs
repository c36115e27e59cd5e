//! Benchmarks for the four-stage cascade.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pullgraph::{
    dsp::{cutoff_coefficient, FilterTap},
    graph::{Filter, Noise, Oscillator},
    Graph, GraphConfig,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("nodes/filter");
    let coefficient = cutoff_coefficient(1_000.0, SAMPLE_RATE);

    for &size in BLOCK_SIZES {
        for (name, tap) in [
            ("lowpass", FilterTap::LowPass),
            ("highpass", FilterTap::HighPass),
            ("bandpass", FilterTap::BandPass),
        ] {
            let mut graph = Graph::new(GraphConfig::new(SAMPLE_RATE, size)).unwrap();
            let noise = graph.add(Noise::seeded(1)).unwrap();
            let filter = graph
                .add(Filter::with_tap(tap, coefficient, noise))
                .unwrap();
            let mut tick = 0;

            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    black_box(graph.get_output(filter, tick).unwrap());
                    tick += size as u64;
                })
            });
        }

        // Swept cutoff: coefficient is a signal, not a constant
        let mut graph = Graph::new(GraphConfig::new(SAMPLE_RATE, size)).unwrap();
        let noise = graph.add(Noise::seeded(1)).unwrap();
        let sweep = graph.add(Oscillator::triangle(0.5)).unwrap();
        let filter = graph.add(Filter::low_pass(sweep, noise)).unwrap();
        let mut tick = 0;
        group.bench_with_input(BenchmarkId::new("lowpass_swept", size), &size, |b, _| {
            b.iter(|| {
                black_box(graph.get_output(filter, tick).unwrap());
                tick += size as u64;
            })
        });
    }

    group.finish();
}
