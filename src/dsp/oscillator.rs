use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Phase-Continuous Oscillators
============================

An oscillator turns a frequency signal into a periodic waveform. Frequency is
itself a per-sample signal, so vibrato and FM need no special casing.

Vocabulary
----------

  phase         Position within one cycle, measured in units of the
                waveform's base period (2π for sine, 1.0 for the others).

  increment     How far the phase moves in one sample:
                    increment = frequency * base_period / sample_rate

  carry         The phase left over at the end of a block, reduced modulo
                the base period. The next block starts from it.


Why Carry the Phase?
--------------------

A naive oscillator computes `sin(2π f n / sr)` from the sample index `n`.
That breaks as soon as `f` changes (the whole history would have to be
re-integrated) and it ties correctness to how blocks were sized.

Carrying the phase makes the waveform depend only on the frequency history:

    block k:   phase = carry_k
               for each sample:  out = shape(phase); phase += increment
               carry_{k+1} = phase mod base_period

However the stream is chopped into blocks, sample n sees the same phase.
The carry is kept in f64 and wrapped every block so it never loses precision
in long sessions.


Wave Shapes (phase in cycles, p = phase mod 1)
----------------------------------------------

  Sine:      sin(phase)               base period 2π
  Saw:       2p - 1                   rises from -1 to 1
  Square:    +1 if p > 0.5, else -1
  Triangle:  4|p - 0.5| - 1           1 → -1 → 1
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Square,
    Triangle,
}

impl Waveform {
    /// Length of one cycle in phase units.
    pub fn base_period(self) -> f64 {
        match self {
            Waveform::Sine => TAU,
            Waveform::Saw | Waveform::Square | Waveform::Triangle => 1.0,
        }
    }

    #[inline]
    pub fn shape(self, phase: f64) -> f32 {
        match self {
            Waveform::Sine => phase.sin() as f32,
            Waveform::Saw => (2.0 * phase.rem_euclid(1.0) - 1.0) as f32,
            Waveform::Square => {
                if phase.rem_euclid(1.0) > 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => (4.0 * (phase.rem_euclid(1.0) - 0.5).abs() - 1.0) as f32,
        }
    }
}

/// Running phase of one oscillator, carried from block to block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor {
    waveform: Waveform,
    phase: f64,
}

impl Phasor {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Phase the next block will start from, in `[0, base_period)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Render one block driven by `frequency` (Hz per sample).
    pub fn render(&mut self, frequency: &[f32], sample_rate: f32, out: &mut [f32]) {
        let period = self.waveform.base_period();
        let scale = period / sample_rate as f64;
        let mut phase = self.phase;

        for (sample, &freq) in out.iter_mut().zip(frequency) {
            *sample = self.waveform.shape(phase);
            phase += freq as f64 * scale;
        }

        self.phase = phase.rem_euclid(period);
    }
}
