use crate::{
    error::GraphError,
    graph::{
        module::{Inputs, Module, Render},
        node::{Input, RenderCtx, Slot},
    },
};

/// Element-wise product state (there is none).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Product;

/// Multiply a signal by an envelope or modulator (amplitude or ring
/// modulation). Slots `source` and `envelope`.
pub type Amp = Module<Product>;

impl Render for Product {
    const NAME: &'static str = "amp";

    fn render_block(
        &mut self,
        inputs: &Inputs<'_>,
        out: &mut [f32],
        _ctx: &RenderCtx,
    ) -> Result<(), GraphError> {
        let source = inputs.signal(0)?;
        let envelope = inputs.signal(1)?;
        for ((o, s), e) in out.iter_mut().zip(source).zip(envelope) {
            *o = s * e;
        }
        Ok(())
    }
}

impl Module<Product> {
    pub fn new(source: impl Into<Input>, envelope: impl Into<Input>) -> Self {
        Module::from_parts(
            Product,
            vec![
                Slot::signal("source", source),
                Slot::signal("envelope", envelope),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::GraphConfig,
        graph::{Graph, Oscillator},
    };

    #[test]
    fn scales_the_source() {
        let mut graph = Graph::new(GraphConfig::new(8.0, 8)).unwrap();
        let saw = graph.add(Oscillator::saw(1.0)).unwrap();
        let half = graph.add(Amp::new(saw, 0.5)).unwrap();

        let expected: Vec<f32> = graph
            .get_output(saw, 0)
            .unwrap()
            .iter()
            .map(|x| x * 0.5)
            .collect();
        assert_eq!(graph.get_output(half, 0).unwrap(), expected.as_slice());
    }
}
