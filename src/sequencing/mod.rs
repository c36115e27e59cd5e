//! Note data handed to the graph by the event boundary.
//!
//! Dispatch policy (MIDI I/O, voice allocation) lives outside the crate; this
//! module only describes notes and how keys map to frequencies.

pub mod note;
pub mod tuning;

pub use note::{press_times, release_times, NoteEvent};
pub use tuning::{EqualTemperament, Tuning};
