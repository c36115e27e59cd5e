use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    error::GraphError,
    graph::{
        module::{Inputs, Module, Render},
        node::RenderCtx,
    },
};

/// Random state of a [`Noise`] node.
pub struct WhiteNoise {
    rng: SmallRng,
}

/// Uniform white noise in [-1, 1), fresh on every tick.
pub type Noise = Module<WhiteNoise>;

impl Render for WhiteNoise {
    const NAME: &'static str = "noise";

    fn render_block(
        &mut self,
        _inputs: &Inputs<'_>,
        out: &mut [f32],
        _ctx: &RenderCtx,
    ) -> Result<(), GraphError> {
        for sample in out.iter_mut() {
            *sample = self.rng.gen_range(-1.0..1.0);
        }
        Ok(())
    }
}

impl Module<WhiteNoise> {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Reproducible noise for tests and offline renders.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Module::from_parts(WhiteNoise { rng }, Vec::new())
    }
}

impl Default for Module<WhiteNoise> {
    fn default() -> Self {
        Self::new()
    }
}
