//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pullgraph::{dsp::Waveform, graph::Oscillator, Graph, GraphConfig};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("nodes/oscillator");

    for &size in BLOCK_SIZES {
        for (name, waveform) in [
            // sin() per sample
            ("sine", Waveform::Sine),
            ("saw", Waveform::Saw),
            // branch per sample
            ("square", Waveform::Square),
            ("triangle", Waveform::Triangle),
        ] {
            let mut graph = Graph::new(GraphConfig::new(SAMPLE_RATE, size)).unwrap();
            let osc = graph
                .add(Oscillator::with_waveform(waveform, 440.0))
                .unwrap();
            let mut tick = 0;

            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    black_box(graph.get_output(osc, tick).unwrap());
                    tick += size as u64;
                })
            });
        }

        // FM: frequency driven by another oscillator
        let mut graph = Graph::new(GraphConfig::new(SAMPLE_RATE, size)).unwrap();
        let modulator = graph.add(Oscillator::sine(5.0)).unwrap();
        let carrier = graph.add(Oscillator::sine(modulator)).unwrap();
        let mut tick = 0;
        group.bench_with_input(BenchmarkId::new("fm", size), &size, |b, _| {
            b.iter(|| {
                black_box(graph.get_output(carrier, tick).unwrap());
                tick += size as u64;
            })
        });
    }

    group.finish();
}
