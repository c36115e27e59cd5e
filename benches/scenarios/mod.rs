//! Real-world scenario benchmarks.
//!
//! Complete voice chains and multi-voice mixes pulled from a single root,
//! including graphs where one node feeds several consumers.

mod mix;
mod voices;

pub use mix::bench_mix;
pub use voices::bench_voices;
