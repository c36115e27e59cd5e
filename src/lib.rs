pub mod config;
pub mod dsp; // Slice-level primitives with no graph knowledge
pub mod error;
pub mod graph; // Pull-evaluated node arena
pub mod runtime;
pub mod sequencing; // Notes and tuning

pub use config::GraphConfig;
pub use error::GraphError;
pub use graph::{Graph, NodeId, Tick};
