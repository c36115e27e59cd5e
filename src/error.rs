use thiserror::Error;

use crate::graph::{NodeId, Tick};

/// Errors raised while assembling or evaluating a signal graph.
///
/// Configuration errors (unknown slots, bad widths, unordered event lists)
/// surface at construction or bind time. Ordering violations and cycles
/// surface at pull time and indicate a caller bug.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node `{node}` has no input named `{slot}`")]
    UnknownInput { node: &'static str, slot: String },

    #[error("input `{slot}` of node `{node}` takes a single signal, not a list")]
    ListInSignalSlot { node: &'static str, slot: &'static str },

    #[error("node id {0:?} does not belong to this graph")]
    UnknownNode(NodeId),

    #[error("buffer size must be at least 1 sample, got {0}")]
    InvalidBufferSize(usize),

    #[error("invalid graph configuration: {0}")]
    InvalidConfig(String),

    #[error("node `{node}` asked for tick {requested} after already rendering tick {cached}")]
    TickRegression {
        node: &'static str,
        requested: Tick,
        cached: Tick,
    },

    #[error("node {0:?} is pulled while it is rendering (feedback cycle)")]
    Cycle(NodeId),

    #[error("event timestamps must be non-decreasing: {next} follows {previous}")]
    UnorderedEvents { previous: f64, next: f64 },

    #[error("mix needs at least one source")]
    EmptyMix,
}
