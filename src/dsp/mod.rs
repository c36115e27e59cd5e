//! Low-level DSP primitives used by the graph nodes.
//!
//! These components know nothing about the graph: they take plain slices and
//! carry their own recurrence state, so each can be tested and benchmarked in
//! isolation. Graph nodes layer input wiring and caching on top.

/// Trigger-driven ADSR and decay curves.
pub mod envelope;
/// Event streams and the cursor merging them with the sample clock.
pub mod events;
/// Four-stage one-pole cascade with selectable taps.
pub mod filter;
/// Waveform shapes and the block-to-block phase carry.
pub mod oscillator;

pub use envelope::{AdsrParams, DecayCurve};
pub use events::{EventCursor, EventList, EventStream, Timed};
pub use filter::{cutoff_coefficient, FilterTap, LadderStages};
pub use oscillator::{Phasor, Waveform};
