#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::events::Timed;

/// A note as delivered by the event boundary.
///
/// `key` is a MIDI-style key number (60 = middle C). `onset` and `duration`
/// are in seconds; a note without a duration is held indefinitely.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    pub key: i32,
    pub onset: f64,
    pub duration: Option<f64>,
}

impl NoteEvent {
    pub fn new(key: i32, onset: f64, duration: f64) -> Self {
        Self {
            key,
            onset,
            duration: Some(duration),
        }
    }

    pub fn held(key: i32, onset: f64) -> Self {
        Self {
            key,
            onset,
            duration: None,
        }
    }

    pub fn release(&self) -> Option<f64> {
        self.duration.map(|duration| self.onset + duration)
    }
}

impl Timed for NoteEvent {
    fn time(&self) -> f64 {
        self.onset
    }
}

/// Onset times in order, ready for a press trigger.
pub fn press_times(notes: &[NoteEvent]) -> Vec<f64> {
    let mut times: Vec<f64> = notes.iter().map(|note| note.onset).collect();
    times.sort_by(f64::total_cmp);
    times
}

/// Release times (onset + duration) in order. Held notes never release.
pub fn release_times(notes: &[NoteEvent]) -> Vec<f64> {
    let mut times: Vec<f64> = notes.iter().filter_map(NoteEvent::release).collect();
    times.sort_by(f64::total_cmp);
    times
}
