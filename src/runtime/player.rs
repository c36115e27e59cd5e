use tracing::debug;

use crate::{
    error::GraphError,
    graph::{Graph, NodeId, Tick},
};

/// Drives a graph from the audio boundary.
///
/// Pulls `root` at `0, w, 2w, ...` where `w` is the current block width,
/// so every node sees strictly increasing ticks. Owns the graph and is
/// `Send`, so it can move into a device callback.
pub struct Player {
    graph: Graph,
    root: NodeId,
    tick: Tick,
}

impl Player {
    pub fn new(graph: Graph, root: NodeId) -> Result<Self, GraphError> {
        graph.buffer_size(root)?;
        Ok(Self {
            graph,
            root,
            tick: 0,
        })
    }

    /// Tick of the next block.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// For rebinding between blocks.
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Render the next block at the current width.
    ///
    /// The tick only advances once the block rendered, so a failed pull is
    /// retried at the same tick.
    pub fn next_block(&mut self) -> Result<&[f32], GraphError> {
        let width = self.graph.buffer_size(self.root)?;
        let block = self.graph.get_output(self.root, self.tick)?;
        self.tick += width as Tick;
        Ok(block)
    }

    /// Fill `out` with the next `out.len()` samples.
    ///
    /// A device buffer of a different length resizes the whole graph first.
    /// An empty buffer is left untouched.
    pub fn render(&mut self, out: &mut [f32]) -> Result<(), GraphError> {
        if out.is_empty() {
            return Ok(());
        }
        if self.graph.buffer_size(self.root)? != out.len() {
            debug!(width = out.len(), "device buffer changed width");
            self.graph.set_buffer_size(self.root, out.len())?;
        }
        out.copy_from_slice(self.next_block()?);
        Ok(())
    }
}
