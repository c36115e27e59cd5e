//! Benchmarks for many voices summed into one root.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pullgraph::{
    dsp::{cutoff_coefficient, AdsrParams, Waveform},
    graph::{Adsr, Amp, Filter, Mix, Noise, Oscillator, SourceList, Trigger},
    Graph, GraphConfig, NodeId,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

fn pad_voice(graph: &mut Graph, press: NodeId, hz: f32, waveform: Waveform) -> NodeId {
    let osc = graph.add(Oscillator::with_waveform(waveform, hz)).unwrap();
    let cutoff = cutoff_coefficient(hz * 4.0, SAMPLE_RATE);
    let filtered = graph.add(Filter::low_pass(cutoff, osc)).unwrap();
    let env = graph
        .add(Adsr::new(press, AdsrParams::new(0.3, 0.5, 0.7, 1.0)))
        .unwrap();
    graph.add(Amp::new(filtered, env)).unwrap()
}

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mix");

    for &size in BLOCK_SIZES {
        for voices in [2usize, 8, 32] {
            let mut graph = Graph::new(GraphConfig::new(SAMPLE_RATE, size)).unwrap();
            // one press trigger shared by every voice
            let press = graph.add(Trigger::from_times(vec![0.0]).unwrap()).unwrap();

            let mut bus = SourceList::new();
            for v in 0..voices {
                let hz = 55.0 * (1.0 + v as f32 * 0.5);
                let waveform = if v % 2 == 0 {
                    Waveform::Saw
                } else {
                    Waveform::Square
                };
                bus.push(pad_voice(&mut graph, press, hz, waveform));
            }
            bus.push(graph.add(Noise::seeded(9)).unwrap());

            let sum = graph.add(Mix::new(bus).unwrap()).unwrap();
            let root = graph.add(Amp::new(sum, 1.0 / voices as f32)).unwrap();
            let mut tick = 0;

            group.bench_with_input(
                BenchmarkId::new(format!("{voices}_voices"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        black_box(graph.get_output(root, tick).unwrap());
                        tick += size as u64;
                    })
                },
            );
        }
    }

    group.finish();
}
