use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Four-Stage One-Pole Cascade
===========================

Four identical one-pole smoothers in series. Each stage chases the one
before it by a fraction `g` of the distance between them:

    s0 += g * (x  - s0)
    s1 += g * (s0 - s1)
    s2 += g * (s1 - s2)
    s3 += g * (s2 - s3)

`g` is the cutoff coefficient in [0, 1]. At 0 nothing moves; at 1 every
stage copies its input in one sample. In between, each stage is a lag with
no overshoot, so four of them in series still never overshoot a step.

The recurrence is strictly sequential: s_k at sample i needs s_k at i-1 and
s_{k-1} at i. There is no whole-block shortcut.

Taps
----

| tap       | output       | passes                 |
| --------- | ------------ | ---------------------- |
| low-pass  | s3           | below cutoff           |
| high-pass | x - s3       | above cutoff           |
| band-pass | s0 - s3      | a band around cutoff   |

All three share one recurrence, so they differ only in the final line.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTap {
    LowPass,
    HighPass,
    BandPass,
}

impl FilterTap {
    #[inline]
    pub fn pick(self, input: f32, first: f32, last: f32) -> f32 {
        match self {
            FilterTap::LowPass => last,
            FilterTap::HighPass => input - last,
            FilterTap::BandPass => first - last,
        }
    }
}

/// Integrator state of the cascade. Persists across blocks and resizes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LadderStages {
    stages: [f32; 4],
}

impl LadderStages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stages(&self) -> [f32; 4] {
        self.stages
    }

    /// Advance one sample. Returns `(first, last)` stage values.
    #[inline]
    pub fn tick(&mut self, input: f32, coefficient: f32) -> (f32, f32) {
        let g = clamp_coefficient(coefficient);
        let mut previous = input;
        for stage in &mut self.stages {
            *stage += g * (previous - *stage);
            previous = *stage;
        }
        (self.stages[0], self.stages[3])
    }

    pub fn process(&mut self, tap: FilterTap, input: &[f32], cutoff: &[f32], out: &mut [f32]) {
        for ((sample, &x), &g) in out.iter_mut().zip(input).zip(cutoff) {
            let (first, last) = self.tick(x, g);
            *sample = tap.pick(x, first, last);
        }
    }
}

/// Coefficients outside [0, 1] would make a stage overshoot or diverge.
/// NaN freezes the cascade.
#[inline]
fn clamp_coefficient(g: f32) -> f32 {
    if g.is_nan() {
        0.0
    } else {
        g.clamp(0.0, 1.0)
    }
}

/// Coefficient giving a one-pole corner near `cutoff_hz`.
///
/// Cutoffs at or past Nyquist saturate towards 1 rather than failing.
pub fn cutoff_coefficient(cutoff_hz: f32, sample_rate: f32) -> f32 {
    clamp_coefficient(1.0 - (-TAU * cutoff_hz / sample_rate).exp())
}
