use crate::{
    error::GraphError,
    graph::{
        module::{Inputs, Module, Render},
        node::{RenderCtx, Slot, SourceList},
    },
};

/// Summing bus state (there is none).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sum;

/// Element-wise sum of an ordered [`SourceList`]. Slot `sources`.
///
/// Members are not scaled: mixing N full-scale signals can reach N. Put an
/// [`Amp`](crate::graph::Amp) after the mix to bring it back in range.
pub type Mix = Module<Sum>;

impl Render for Sum {
    const NAME: &'static str = "mix";

    fn render_block(
        &mut self,
        inputs: &Inputs<'_>,
        out: &mut [f32],
        _ctx: &RenderCtx,
    ) -> Result<(), GraphError> {
        out.fill(0.0);
        let members = inputs.for_each_in_list(0, |block| {
            for (o, x) in out.iter_mut().zip(block) {
                *o += x;
            }
        })?;

        // a later bind may have swapped in an empty list
        if members == 0 {
            return Err(GraphError::EmptyMix);
        }
        Ok(())
    }
}

impl Module<Sum> {
    /// Fails with `EmptyMix` when `sources` has no members.
    pub fn new(sources: impl Into<SourceList>) -> Result<Self, GraphError> {
        let sources = sources.into();
        if sources.is_empty() {
            return Err(GraphError::EmptyMix);
        }
        Ok(Module::from_parts(Sum, vec![Slot::list("sources", sources)]))
    }
}
