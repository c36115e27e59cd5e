//! Benchmarks for complete voice chains.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pullgraph::{
    dsp::{cutoff_coefficient, AdsrParams},
    graph::{Adsr, Amp, Filter, Mix, NoteFreq, Oscillator, SourceList, Trigger},
    sequencing::{press_times, release_times, EqualTemperament, NoteEvent},
    Graph, GraphConfig, NodeId,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

/// An eighth-note arpeggio long enough to outlast any benchmark run.
fn arpeggio() -> Vec<NoteEvent> {
    const KEYS: [i32; 4] = [45, 52, 57, 60];
    (0..20_000)
        .map(|i| NoteEvent::new(KEYS[i % 4], i as f64 * 0.125, 0.1))
        .collect()
}

/// note → saw → ladder low-pass → ADSR
fn lead(graph: &mut Graph) -> NodeId {
    let notes = arpeggio();
    let pitch = graph
        .add(NoteFreq::new(notes.clone(), EqualTemperament::default()).unwrap())
        .unwrap();
    let saw = graph.add(Oscillator::saw(pitch)).unwrap();
    let cutoff = cutoff_coefficient(2_500.0, SAMPLE_RATE);
    let filtered = graph.add(Filter::low_pass(cutoff, saw)).unwrap();
    let press = graph
        .add(Trigger::from_times(press_times(&notes)).unwrap())
        .unwrap();
    let release = graph
        .add(Trigger::from_times(release_times(&notes)).unwrap())
        .unwrap();
    let env = graph
        .add(Adsr::with_release(
            press,
            release,
            AdsrParams::new(0.01, 0.05, 0.6, 0.05),
        ))
        .unwrap();
    graph.add(Amp::new(filtered, env)).unwrap()
}

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");

    for &size in BLOCK_SIZES {
        let mut graph = Graph::new(GraphConfig::new(SAMPLE_RATE, size)).unwrap();
        let root = lead(&mut graph);
        let mut tick = 0;

        group.bench_with_input(BenchmarkId::new("lead", size), &size, |b, _| {
            b.iter(|| {
                black_box(graph.get_output(root, tick).unwrap());
                tick += size as u64;
            })
        });

        // Detuned pair sharing one pitch node (diamond)
        let mut graph = Graph::new(GraphConfig::new(SAMPLE_RATE, size)).unwrap();
        let pitch = graph.add(Oscillator::sine(0.2)).unwrap();
        let pitch = graph.add(Amp::new(pitch, 2.0)).unwrap();
        let pitch = graph
            .add(Mix::new(SourceList::new().with(pitch).with(110.0)).unwrap())
            .unwrap();
        let detuned = graph.add(Amp::new(pitch, 1.007)).unwrap();
        let a = graph.add(Oscillator::saw(pitch)).unwrap();
        let b = graph.add(Oscillator::saw(detuned)).unwrap();
        let pair = graph.add(Mix::new(vec![a, b]).unwrap()).unwrap();
        let mut tick = 0;

        group.bench_with_input(BenchmarkId::new("detuned_pair", size), &size, |bench, _| {
            bench.iter(|| {
                black_box(graph.get_output(pair, tick).unwrap());
                tick += size as u64;
            })
        });
    }

    group.finish();
}
