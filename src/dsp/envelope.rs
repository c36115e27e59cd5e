#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Trigger-Driven Envelopes
========================

These envelopes hold no timers of their own. Their inputs are trigger
signals that already report "seconds since the last press" and "seconds
since the last release" per sample, or a negative sentinel when no such
event has happened yet. The envelope level is then a pure function of those
two numbers, which keeps it correct across any block layout.

  press elapsed  e     time since the key went down
  release elapsed r    time since the key went up

The ADSR Shape
--------------

  Level
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ Time
         A    D     Sustain   R

  e < A              e / A
  e < A + D          1 - (1 - S) * (e - A) / D
  otherwise          S

A release counts only when it happened after the latest press (r <= e).
While r < R the level drops by S * r / R, reaching zero at r = R, and it
stays at zero afterwards.

Zero-length stages never divide: the `<` comparisons skip them entirely.
*/

/// Attack, decay and release durations in seconds plus the sustain level.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,
}

impl AdsrParams {
    pub fn new(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Level while the key is held `elapsed` seconds.
    #[inline]
    pub fn held_level(&self, elapsed: f32) -> f32 {
        if elapsed < self.attack {
            elapsed / self.attack
        } else if elapsed < self.attack + self.decay {
            1.0 - (1.0 - self.sustain) * (elapsed - self.attack) / self.decay
        } else {
            self.sustain
        }
    }

    /// Envelope level from press and release elapsed times. Negative
    /// values mean the event has not happened yet.
    #[inline]
    pub fn level(&self, press: f32, release: f32) -> f32 {
        if press < 0.0 {
            return 0.0;
        }

        let held = self.held_level(press);
        if release < 0.0 || release > press {
            return held;
        }

        if release < self.release {
            (held - self.sustain * release / self.release).max(0.0)
        } else {
            0.0
        }
    }
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self::new(0.01, 0.1, 0.7, 0.2)
    }
}

/// Shape of a one-shot decay from 1 to 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecayCurve {
    Linear,
    Quadratic,
}

impl DecayCurve {
    /// `1 - (min(e, d) / d)^p`, zero before the first press.
    #[inline]
    pub fn level(self, elapsed: f32, duration: f32) -> f32 {
        if elapsed < 0.0 || elapsed >= duration {
            return 0.0;
        }
        let progress = elapsed / duration;
        match self {
            DecayCurve::Linear => 1.0 - progress,
            DecayCurve::Quadratic => 1.0 - progress * progress,
        }
    }
}
