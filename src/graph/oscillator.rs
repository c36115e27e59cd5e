use crate::{
    dsp::oscillator::{Phasor, Waveform},
    error::GraphError,
    graph::{
        module::{Inputs, Module, Render},
        node::{Input, RenderCtx, Slot},
    },
};

/*
Audio Oscillator
================

The fundamental sound source. Its only input is a frequency signal in Hz,
read per sample, so a constant pitch, a vibrato LFO and an audio-rate FM
modulator are all just different things bound to the same slot.

Sine: a single frequency with no harmonics.
Sawtooth: all harmonics, falling off as 1/n. Bright and buzzy.
Square: odd harmonics only, falling off as 1/n. Hollow.
Triangle: odd harmonics falling off as 1/n². Soft.

The phase carry lives in `Phasor`; this node only wires the frequency input.

Example:
  let lfo = graph.add(Oscillator::sine(5.0))?;
  let vibrato = graph.add(Amp::new(lfo, 3.0))?;
  let pitch = graph.add(Mix::new(SourceList::new().with(440.0).with(vibrato))?)?;
  let voice = graph.add(Oscillator::saw(pitch))?;
*/

/// Phase-continuous oscillator. Slot `frequency` (Hz).
pub type Oscillator = Module<Phasor>;

impl Render for Phasor {
    const NAME: &'static str = "oscillator";

    fn render_block(
        &mut self,
        inputs: &Inputs<'_>,
        out: &mut [f32],
        ctx: &RenderCtx,
    ) -> Result<(), GraphError> {
        let frequency = inputs.signal(0)?;
        self.render(frequency, ctx.sample_rate, out);
        Ok(())
    }
}

impl Module<Phasor> {
    pub fn with_waveform(waveform: Waveform, frequency: impl Into<Input>) -> Self {
        Module::from_parts(
            Phasor::new(waveform),
            vec![Slot::signal("frequency", frequency)],
        )
    }

    pub fn sine(frequency: impl Into<Input>) -> Self {
        Self::with_waveform(Waveform::Sine, frequency)
    }

    pub fn saw(frequency: impl Into<Input>) -> Self {
        Self::with_waveform(Waveform::Saw, frequency)
    }

    pub fn square(frequency: impl Into<Input>) -> Self {
        Self::with_waveform(Waveform::Square, frequency)
    }

    pub fn triangle(frequency: impl Into<Input>) -> Self {
        Self::with_waveform(Waveform::Triangle, frequency)
    }

    pub fn waveform(&self) -> Waveform {
        self.state().waveform()
    }

    /// Phase carried into the next block.
    pub fn phase(&self) -> f64 {
        self.state().phase()
    }
}
