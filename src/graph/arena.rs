use tracing::debug;

use crate::{
    config::GraphConfig,
    error::GraphError,
    graph::{
        constant::Constant,
        node::{Input, Slot, SlotKind, Source},
    },
};

/// Index of the first sample of a block, counted from the start of the session.
pub type Tick = u64;

/// Handle to a node owned by a [`Graph`].
///
/// Sharing a node between several consumers means sharing its id; the node
/// itself is never copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/*
Pull Evaluation
===============

The graph owns every node. A consumer asks for the block starting at `tick`
from some root node; that node pulls each of its inputs at the same tick,
which pull theirs, down to sources with no inputs.

    get_output(root, t)
        └─ root.update(t)
              ├─ pull(freq, t)      ← cached if someone already pulled it at t
              ├─ pull(env, t)
              └─ render block       ← reads the inputs' buffers

Each node caches the tick of its last render. A second pull at the same tick
(two consumers sharing one node) returns the cached buffer, so every node
renders at most once per block no matter how many consumers it has.

While a node renders it is detached from the arena: the node is moved out of
its slot, given `&mut Graph` to pull its inputs, then put back. Meeting an
empty slot during a pull therefore means the node is (indirectly) its own
input, which is reported as `GraphError::Cycle`.
*/

/// Arena of signal nodes evaluated by pulling from a root.
pub struct Graph {
    nodes: Vec<Option<Box<dyn Source>>>,
    config: GraphConfig,
}

impl Graph {
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;
        Ok(Self {
            nodes: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn sample_rate(&self) -> f32 {
        self.config.sample_rate
    }

    /// Width given to nodes added from now on.
    pub fn block_size(&self) -> usize {
        self.config.block_size
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node, wiring its slots.
    ///
    /// Bare values bound to slots become `Constant` nodes here, and every
    /// input is sized to the graph's current block width.
    pub fn add<S: Source + 'static>(&mut self, node: S) -> Result<NodeId, GraphError> {
        let mut node: Box<dyn Source> = Box::new(node);
        let name = node.name();

        for slot in node.slots_mut() {
            let input = std::mem::replace(slot.input_mut(), Input::Value(0.0));
            let resolved = self.resolve(name, slot, input)?;
            *slot.input_mut() = resolved;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(node));
        self.resize_from(id, self.config.block_size)?;

        debug!(node = name, id = id.0, "added node");
        Ok(id)
    }

    /// Rebind the slot called `slot` on node `id`.
    pub fn bind(
        &mut self,
        id: NodeId,
        slot: &str,
        input: impl Into<Input>,
    ) -> Result<(), GraphError> {
        let mut node = self.detach(id)?;
        let result = self.bind_detached(node.as_mut(), slot, input.into());
        self.attach(id, node);

        if result.is_ok() {
            debug!(id = id.0, slot, "rebound input");
        }
        result
    }

    fn bind_detached(
        &mut self,
        node: &mut dyn Source,
        slot_name: &str,
        input: Input,
    ) -> Result<(), GraphError> {
        let name = node.name();
        let width = node.buffer_size();

        let slot = node
            .slots_mut()
            .iter_mut()
            .find(|slot| slot.name() == slot_name)
            .ok_or_else(|| GraphError::UnknownInput {
                node: name,
                slot: slot_name.to_string(),
            })?;

        let resolved = self.resolve(name, slot, input)?;
        resolved.for_each_node(&mut |input_id| self.resize_from(input_id, width))?;
        *slot.input_mut() = resolved;
        Ok(())
    }

    /// Turn a raw input into one that only references nodes of this graph.
    fn resolve(
        &mut self,
        node: &'static str,
        slot: &Slot,
        input: Input,
    ) -> Result<Input, GraphError> {
        let input = match (slot.kind(), input) {
            (SlotKind::Signal, Input::List(_)) => {
                return Err(GraphError::ListInSignalSlot {
                    node,
                    slot: slot.name(),
                })
            }
            (SlotKind::List, Input::List(list)) => Input::List(list),
            (SlotKind::List, single) => Input::List(std::iter::once(single).collect()),
            (SlotKind::Signal, single) => single,
        };
        self.resolve_values(input)
    }

    fn resolve_values(&mut self, input: Input) -> Result<Input, GraphError> {
        match input {
            Input::Node(id) => {
                if id.0 >= self.nodes.len() {
                    return Err(GraphError::UnknownNode(id));
                }
                Ok(Input::Node(id))
            }
            Input::Value(value) => Ok(Input::Node(self.add(Constant::new(value))?)),
            Input::List(mut list) => {
                let members = std::mem::take(list.members_mut());
                for member in members {
                    let resolved = self.resolve_values(member)?;
                    list.members_mut().push(resolved);
                }
                Ok(Input::List(list))
            }
        }
    }

    /// Pull `id` at `tick` and return its block.
    pub fn get_output(&mut self, id: NodeId, tick: Tick) -> Result<&[f32], GraphError> {
        self.pull(id, tick)?;
        self.output(id)
    }

    /// Change the block width starting from `id`.
    ///
    /// The width is uniform across the graph, so `id` and, depth-first,
    /// everything it reads from are resized first, then every remaining
    /// node, including other roots sharing those inputs.
    ///
    /// Must not be called while a block is being rendered. Every resized
    /// node forgets its cached tick, so the next pull recomputes it.
    /// Recurrence state (phase, filter stages, event cursors) is kept.
    pub fn set_buffer_size(&mut self, id: NodeId, size: usize) -> Result<(), GraphError> {
        if size == 0 {
            return Err(GraphError::InvalidBufferSize(size));
        }
        self.resize_from(id, size)?;
        for index in 0..self.nodes.len() {
            self.resize_from(NodeId(index), size)?;
        }
        self.config.block_size = size;
        Ok(())
    }

    pub fn buffer_size(&self, id: NodeId) -> Result<usize, GraphError> {
        Ok(self.node(id)?.buffer_size())
    }

    fn resize_from(&mut self, id: NodeId, size: usize) -> Result<(), GraphError> {
        let mut node = self.detach(id)?;
        if node.buffer_size() == size {
            self.attach(id, node);
            return Ok(());
        }

        node.resize(size);
        debug!(node = node.name(), id = id.0, size, "resized buffer");

        let result = node.slots().iter().try_for_each(|slot| {
            slot.input()
                .for_each_node(&mut |input| self.resize_from(input, size))
        });
        self.attach(id, node);
        result
    }

    /// Make sure `id` holds its block for `tick`.
    pub(crate) fn pull(&mut self, id: NodeId, tick: Tick) -> Result<(), GraphError> {
        let mut node = self.detach(id)?;
        let result = node.update(tick, self);
        self.attach(id, node);
        result
    }

    pub(crate) fn pull_input(&mut self, input: &Input, tick: Tick) -> Result<(), GraphError> {
        input.for_each_node(&mut |id| self.pull(id, tick))
    }

    /// Buffer last rendered by `id`.
    pub(crate) fn output(&self, id: NodeId) -> Result<&[f32], GraphError> {
        Ok(self.node(id)?.output())
    }

    fn node(&self, id: NodeId) -> Result<&dyn Source, GraphError> {
        match self.nodes.get(id.0) {
            Some(Some(node)) => Ok(node.as_ref()),
            Some(None) => Err(GraphError::Cycle(id)),
            None => Err(GraphError::UnknownNode(id)),
        }
    }

    fn detach(&mut self, id: NodeId) -> Result<Box<dyn Source>, GraphError> {
        self.nodes
            .get_mut(id.0)
            .ok_or(GraphError::UnknownNode(id))?
            .take()
            .ok_or(GraphError::Cycle(id))
    }

    fn attach(&mut self, id: NodeId, node: Box<dyn Source>) {
        self.nodes[id.0] = Some(node);
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            config: GraphConfig::default(),
        }
    }
}
