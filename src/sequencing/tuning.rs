/// Maps key numbers to frequencies.
pub trait Tuning: Send {
    fn frequency(&self, key: i32) -> f32;
}

/// Equal division of the octave around a reference key.
///
/// The default is 12-TET with A4 (key 69) at 440 Hz:
///
/// ```text
/// f(key) = reference_hz * 2^((key - reference_key) / keys_per_octave)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualTemperament {
    pub reference_key: i32,
    pub reference_hz: f32,
    pub keys_per_octave: u32,
}

impl EqualTemperament {
    pub fn new(reference_key: i32, reference_hz: f32, keys_per_octave: u32) -> Self {
        Self {
            reference_key,
            reference_hz,
            keys_per_octave: keys_per_octave.max(1),
        }
    }
}

impl Default for EqualTemperament {
    fn default() -> Self {
        Self::new(69, 440.0, 12)
    }
}

impl Tuning for EqualTemperament {
    fn frequency(&self, key: i32) -> f32 {
        let steps = (key - self.reference_key) as f32 / self.keys_per_octave as f32;
        self.reference_hz * steps.exp2()
    }
}
