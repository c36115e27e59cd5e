use tracing::{trace, warn};

use crate::{
    error::GraphError,
    graph::{
        node::{Input, RenderCtx, Slot, Source},
        Graph, Tick,
    },
};

/// Per-block computation of a stateful node.
///
/// Implementors hold only their private recurrence state (phase, filter
/// stages, event cursors). Input wiring, the output buffer and tick caching
/// live in the surrounding [`Module`].
pub trait Render: Send {
    const NAME: &'static str;

    /// Fill `out` with the block starting at `ctx.tick`.
    ///
    /// Every input has already been pulled at the same tick.
    fn render_block(
        &mut self,
        inputs: &Inputs<'_>,
        out: &mut [f32],
        ctx: &RenderCtx,
    ) -> Result<(), GraphError>;
}

/// A stateful node: named input slots, an output buffer, the tick that
/// buffer belongs to, and the node-specific [`Render`] state.
pub struct Module<R> {
    render: R,
    slots: Vec<Slot>,
    buffer: Vec<f32>,
    /// `None` until the first render and after every resize.
    cached_tick: Option<Tick>,
    /// Latest tick ever rendered. Survives resizes.
    high_water: Option<Tick>,
}

impl<R: Render> Module<R> {
    pub fn from_parts(render: R, slots: Vec<Slot>) -> Self {
        Self {
            render,
            slots,
            buffer: Vec::new(),
            cached_tick: None,
            high_water: None,
        }
    }

    /// Node-specific state, for inspection.
    pub fn state(&self) -> &R {
        &self.render
    }

    pub fn cached_tick(&self) -> Option<Tick> {
        self.cached_tick
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.name() == name)
    }
}

impl<R: Render> Source for Module<R> {
    fn name(&self) -> &'static str {
        R::NAME
    }

    fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn resize(&mut self, size: usize) {
        self.buffer = vec![0.0; size];
        self.cached_tick = None;
    }

    fn update(&mut self, tick: Tick, graph: &mut Graph) -> Result<(), GraphError> {
        if self.cached_tick == Some(tick) {
            return Ok(());
        }
        // a resize may re-render the latest tick, never an earlier one
        if let Some(cached) = self.high_water.filter(|&latest| tick < latest) {
            warn!(node = R::NAME, tick, cached, "tick went backwards");
            return Err(GraphError::TickRegression {
                node: R::NAME,
                requested: tick,
                cached,
            });
        }

        // Pull everything first: no input buffer is borrowed while another
        // input may still need to render.
        for slot in &self.slots {
            graph.pull_input(slot.input(), tick)?;
        }

        let ctx = RenderCtx::new(graph.sample_rate(), tick);
        let inputs = Inputs {
            node: R::NAME,
            graph: &*graph,
            slots: &self.slots,
        };
        self.render.render_block(&inputs, &mut self.buffer, &ctx)?;
        self.cached_tick = Some(tick);
        self.high_water = Some(tick);

        trace!(node = R::NAME, tick, width = self.buffer.len(), "rendered block");
        Ok(())
    }

    fn output(&self) -> &[f32] {
        &self.buffer
    }

    fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }
}

/// Read access to a module's already-pulled inputs, addressed by slot index.
pub struct Inputs<'a> {
    node: &'static str,
    graph: &'a Graph,
    slots: &'a [Slot],
}

impl<'a> Inputs<'a> {
    /// Block of the single signal bound to slot `index`.
    pub fn signal(&self, index: usize) -> Result<&'a [f32], GraphError> {
        match self.slots.get(index).map(Slot::input) {
            Some(Input::Node(id)) => self.graph.output(*id),
            _ => Err(self.unbound(index)),
        }
    }

    /// Call `f` with the block of every member of the list bound to slot
    /// `index`, in order. Returns the number of members visited.
    pub fn for_each_in_list(
        &self,
        index: usize,
        mut f: impl FnMut(&[f32]),
    ) -> Result<usize, GraphError> {
        let input = match self.slots.get(index).map(Slot::input) {
            Some(input @ Input::List(_)) => input,
            _ => return Err(self.unbound(index)),
        };

        let mut visited = 0;
        input.for_each_node(&mut |id| {
            f(self.graph.output(id)?);
            visited += 1;
            Ok::<(), GraphError>(())
        })?;
        Ok(visited)
    }

    fn unbound(&self, index: usize) -> GraphError {
        GraphError::UnknownInput {
            node: self.node,
            slot: self
                .slots
                .get(index)
                .map_or_else(|| format!("#{index}"), |slot| slot.name().to_string()),
        }
    }
}
