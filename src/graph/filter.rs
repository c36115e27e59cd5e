use crate::{
    dsp::filter::{FilterTap, LadderStages},
    error::GraphError,
    graph::{
        module::{Inputs, Module, Render},
        node::{Input, RenderCtx, Slot},
    },
};

/// Recurrence state of a [`Filter`] node plus the tap it exposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ladder {
    tap: FilterTap,
    stages: LadderStages,
}

impl Ladder {
    pub fn tap(&self) -> FilterTap {
        self.tap
    }

    pub fn stages(&self) -> [f32; 4] {
        self.stages.stages()
    }
}

/// Four-stage one-pole cascade.
///
/// Slots: `cutoff` is the per-sample coefficient in [0, 1] (see
/// [`cutoff_coefficient`](crate::dsp::filter::cutoff_coefficient) to derive
/// it from Hz), `source` is the signal being filtered.
pub type Filter = Module<Ladder>;

impl Render for Ladder {
    const NAME: &'static str = "filter";

    fn render_block(
        &mut self,
        inputs: &Inputs<'_>,
        out: &mut [f32],
        _ctx: &RenderCtx,
    ) -> Result<(), GraphError> {
        let cutoff = inputs.signal(0)?;
        let source = inputs.signal(1)?;
        self.stages.process(self.tap, source, cutoff, out);
        Ok(())
    }
}

impl Module<Ladder> {
    pub fn with_tap(tap: FilterTap, cutoff: impl Into<Input>, source: impl Into<Input>) -> Self {
        Module::from_parts(
            Ladder {
                tap,
                stages: LadderStages::new(),
            },
            vec![
                Slot::signal("cutoff", cutoff),
                Slot::signal("source", source),
            ],
        )
    }

    pub fn low_pass(cutoff: impl Into<Input>, source: impl Into<Input>) -> Self {
        Self::with_tap(FilterTap::LowPass, cutoff, source)
    }

    pub fn high_pass(cutoff: impl Into<Input>, source: impl Into<Input>) -> Self {
        Self::with_tap(FilterTap::HighPass, cutoff, source)
    }

    pub fn band_pass(cutoff: impl Into<Input>, source: impl Into<Input>) -> Self {
        Self::with_tap(FilterTap::BandPass, cutoff, source)
    }
}
