use crate::error::GraphError;
use crate::graph::{Graph, NodeId, Tick};

/// Context handed to a node while it renders one block.
///
/// - sample_rate: samples per second, fixed for the life of the graph
/// - tick: global index of the first sample in the block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub tick: Tick,
}

impl RenderCtx {
    pub fn new(sample_rate: f32, tick: Tick) -> Self {
        Self { sample_rate, tick }
    }

    /// Time in seconds of sample `index` within the block.
    #[inline]
    pub fn sample_time(&self, index: usize) -> f64 {
        (self.tick + index as Tick) as f64 / self.sample_rate as f64
    }
}

/// Core trait for every node stored in a [`Graph`].
///
/// A source produces one block of `buffer_size()` samples per tick. The
/// graph drives it through `update`, which must leave `output()` holding
/// the samples for `[tick, tick + buffer_size())`.
pub trait Source: Send {
    /// Short, stable name used in errors and logs.
    fn name(&self) -> &'static str;

    fn buffer_size(&self) -> usize;

    /// Reallocate this node's own buffer and forget the cached tick.
    ///
    /// Inputs are resized by the graph, not here.
    fn resize(&mut self, size: usize);

    /// Bring `output()` up to date for `tick`, pulling inputs from `graph`.
    fn update(&mut self, tick: Tick, graph: &mut Graph) -> Result<(), GraphError>;

    fn output(&self) -> &[f32];

    /// Declared input slots in binding order.
    fn slots(&self) -> &[Slot] {
        &[]
    }

    fn slots_mut(&mut self) -> &mut [Slot] {
        &mut []
    }
}

/// What an input slot is wired to.
///
/// `Value` only exists between construction and `Graph::add`/`Graph::bind`,
/// which replace it with a `Constant` node.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Node(NodeId),
    Value(f32),
    List(SourceList),
}

impl Input {
    /// Visit every node id reachable through this input, in order.
    pub(crate) fn for_each_node<E>(
        &self,
        f: &mut impl FnMut(NodeId) -> Result<(), E>,
    ) -> Result<(), E> {
        match self {
            Input::Node(id) => f(*id),
            Input::Value(_) => Ok(()),
            Input::List(list) => list
                .members
                .iter()
                .try_for_each(|member| member.for_each_node(f)),
        }
    }
}

impl From<NodeId> for Input {
    fn from(id: NodeId) -> Self {
        Input::Node(id)
    }
}

impl From<f32> for Input {
    fn from(value: f32) -> Self {
        Input::Value(value)
    }
}

impl From<SourceList> for Input {
    fn from(list: SourceList) -> Self {
        Input::List(list)
    }
}

/// Ordered sources bound to a variable-arity slot (e.g. the inputs of a mix).
///
/// Pulling the list at a tick pulls every member at that tick, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceList {
    members: Vec<Input>,
}

impl SourceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, member: impl Into<Input>) {
        self.members.push(member.into());
    }

    pub fn with(mut self, member: impl Into<Input>) -> Self {
        self.push(member);
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Input> {
        self.members.iter()
    }

    pub(crate) fn members_mut(&mut self) -> &mut Vec<Input> {
        &mut self.members
    }
}

impl<I: Into<Input>> FromIterator<I> for SourceList {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            members: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<NodeId>> for SourceList {
    fn from(ids: Vec<NodeId>) -> Self {
        ids.into_iter().collect()
    }
}

/// Whether a slot takes one signal or an ordered list of signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Signal,
    List,
}

/// A named input of a node together with its current binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    name: &'static str,
    kind: SlotKind,
    input: Input,
}

impl Slot {
    pub fn signal(name: &'static str, input: impl Into<Input>) -> Self {
        Self {
            name,
            kind: SlotKind::Signal,
            input: input.into(),
        }
    }

    pub fn list(name: &'static str, list: SourceList) -> Self {
        Self {
            name,
            kind: SlotKind::List,
            input: Input::List(list),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }
}
