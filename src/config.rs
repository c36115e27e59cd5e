#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Sample rate and block width shared by every node in a graph.
///
/// Supplied by the audio boundary when the graph is built. The block size
/// can later change through `Graph::set_buffer_size`; the sample rate cannot.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    pub sample_rate: f32,
    pub block_size: usize,
}

impl GraphConfig {
    pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
    pub const DEFAULT_BLOCK_SIZE: usize = 1024;

    pub fn new(sample_rate: f32, block_size: usize) -> Self {
        Self {
            sample_rate,
            block_size,
        }
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(GraphError::InvalidConfig(format!(
                "sample rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.block_size == 0 {
            return Err(GraphError::InvalidBufferSize(self.block_size));
        }
        Ok(())
    }

    /// Wall-clock time available to render one block.
    pub fn block_deadline_secs(&self) -> f64 {
        self.block_size as f64 / self.sample_rate as f64
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SAMPLE_RATE, Self::DEFAULT_BLOCK_SIZE)
    }
}
