use crate::{
    error::GraphError,
    graph::{node::Source, Graph, Tick},
};

/// A fixed value broadcast across the whole block.
///
/// The buffer only changes when the graph is resized, so any tick may be
/// requested in any order.
pub struct Constant {
    value: f32,
    buffer: Vec<f32>,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            buffer: Vec::new(),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

impl Source for Constant {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn resize(&mut self, size: usize) {
        self.buffer = vec![self.value; size];
    }

    fn update(&mut self, _tick: Tick, _graph: &mut Graph) -> Result<(), GraphError> {
        Ok(())
    }

    fn output(&self) -> &[f32] {
        &self.buffer
    }
}
