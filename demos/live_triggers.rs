//! Plays a filtered saw whose notes are pressed from a control thread.
//!
//! The control thread pushes press and release timestamps (seconds since the
//! stream started) into lock-free queues; trigger nodes inside the graph pop
//! them as the sample clock reaches them.
//!
//! Run with: cargo run --example live_triggers

use std::{thread, time::Duration, time::Instant};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use pullgraph::{
    dsp::{cutoff_coefficient, AdsrParams},
    graph::{Adsr, Amp, Filter, Mix, Oscillator, SourceList, Trigger},
    runtime::Player,
    Graph, GraphConfig,
};
use rtrb::RingBuffer;
use tracing::info;

const NOTE_SECONDS: f64 = 0.4;
const GAP_SECONDS: f64 = 0.1;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    info!(sample_rate, channels, "opened output device");

    let (mut press_tx, press_rx) = RingBuffer::<f64>::new(64);
    let (mut release_tx, release_rx) = RingBuffer::<f64>::new(64);

    let mut graph = Graph::new(GraphConfig::new(sample_rate, GraphConfig::DEFAULT_BLOCK_SIZE))?;
    let press = graph.add(Trigger::from_stream(press_rx))?;
    let release = graph.add(Trigger::from_stream(release_rx))?;
    let env = graph.add(Adsr::with_release(
        press,
        release,
        AdsrParams::new(0.01, 0.1, 0.6, 0.15),
    ))?;

    // 220 Hz with a 5 Hz, 3 Hz-deep vibrato
    let vibrato = graph.add(Oscillator::sine(5.0))?;
    let vibrato = graph.add(Amp::new(vibrato, 3.0))?;
    let pitch = graph.add(Mix::new(SourceList::new().with(220.0).with(vibrato))?)?;
    let saw = graph.add(Oscillator::saw(pitch))?;
    let filtered = graph.add(Filter::low_pass(
        cutoff_coefficient(1_200.0, sample_rate),
        saw,
    ))?;
    let voice = graph.add(Amp::new(filtered, env))?;
    let root = graph.add(Amp::new(voice, 0.3))?;

    let mut player = Player::new(graph, root)?;
    let mut mono = vec![0.0f32; GraphConfig::DEFAULT_BLOCK_SIZE];

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            let frames = data.len() / channels;
            if mono.len() < frames {
                mono.resize(frames, 0.0);
            }
            let block = &mut mono[..frames];

            if let Err(err) = player.render(block) {
                tracing::error!(%err, "graph failed, writing silence");
                block.fill(0.0);
            }

            for (frame, &sample) in data.chunks_mut(channels).zip(block.iter()) {
                frame.fill(sample);
            }
        },
        |err| tracing::error!(%err, "audio stream error"),
        None,
    )?;

    stream.play()?;
    let start = Instant::now();
    info!("playing eight notes");

    for _ in 0..8 {
        let now = start.elapsed().as_secs_f64();
        press_tx
            .push(now)
            .map_err(|_| eyre!("press queue full"))?;
        release_tx
            .push(now + NOTE_SECONDS)
            .map_err(|_| eyre!("release queue full"))?;
        thread::sleep(Duration::from_secs_f64(NOTE_SECONDS + GAP_SECONDS));
    }

    thread::sleep(Duration::from_millis(300));
    Ok(())
}
