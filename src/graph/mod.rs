//! Pull-evaluated signal graph.
//!
//! A [`Graph`] owns every node; nodes refer to each other through [`NodeId`]s.
//! Asking a node for the block at some tick pulls its inputs at the same tick,
//! renders once, and caches the result for any other consumer asking for that
//! tick.

/// Multiply a signal by an envelope or modulator.
pub mod amplify;
/// The node arena, pulling and resizing.
pub mod arena;
/// Fixed-value source, also used for bare numeric inputs.
pub mod constant;
/// ADSR and single-stage decay envelopes driven by triggers.
pub mod envelope;
/// Four-stage one-pole cascade with low/high/band-pass taps.
pub mod filter;
/// Sum of an ordered list of sources.
pub mod mix;
/// Slot wiring and tick caching shared by stateful nodes.
pub mod module;
/// Core traits and input bindings shared by all graph nodes.
pub mod node;
/// Uniform white noise.
pub mod noise;
/// Frequency of the most recently started note.
pub mod note_freq;
/// Phase-continuous oscillators with a frequency input.
pub mod oscillator;
/// Elapsed time since the most recent event.
pub mod trigger;

pub use amplify::Amp;
pub use arena::{Graph, NodeId, Tick};
pub use constant::Constant;
pub use envelope::{Adsr, Decay};
pub use filter::Filter;
pub use mix::Mix;
pub use module::{Inputs, Module, Render};
pub use node::{Input, RenderCtx, Slot, SlotKind, Source, SourceList};
pub use noise::Noise;
pub use note_freq::NoteFreq;
pub use oscillator::Oscillator;
pub use trigger::{Trigger, NO_EVENT};
