use crate::{
    dsp::events::{EventCursor, EventList, EventStream},
    error::GraphError,
    graph::{
        module::{Inputs, Module, Render},
        node::RenderCtx,
    },
};

/// Output value before the first event has fired.
///
/// Every real elapsed time is `>= 0`, so consumers can test `< 0.0`.
pub const NO_EVENT: f32 = -1.0;

/// Event cursor behind a [`Trigger`] node.
pub struct EventClock {
    cursor: EventCursor<f64>,
}

impl EventClock {
    /// Timestamp of the most recent event fired so far.
    pub fn last_event(&self) -> Option<f64> {
        self.cursor.last()
    }
}

/// Seconds since the most recent event, or [`NO_EVENT`].
///
/// Has no input slots: events come from an [`EventStream`], either a
/// pre-recorded list or a live queue fed by a control thread.
pub type Trigger = Module<EventClock>;

impl Render for EventClock {
    const NAME: &'static str = "trigger";

    fn render_block(
        &mut self,
        _inputs: &Inputs<'_>,
        out: &mut [f32],
        ctx: &RenderCtx,
    ) -> Result<(), GraphError> {
        for (i, sample) in out.iter_mut().enumerate() {
            let time = ctx.sample_time(i);
            *sample = match self.cursor.advance_to(time) {
                Some(fired) => (time - fired) as f32,
                None => NO_EVENT,
            };
        }
        Ok(())
    }
}

impl Module<EventClock> {
    /// Fails with `UnorderedEvents` unless `times` is non-decreasing.
    pub fn from_times(times: Vec<f64>) -> Result<Self, GraphError> {
        Ok(Self::from_stream(EventList::new(times)?))
    }

    pub fn from_stream(stream: impl EventStream<f64> + 'static) -> Self {
        Module::from_parts(
            EventClock {
                cursor: EventCursor::new(stream),
            },
            Vec::new(),
        )
    }

    pub fn last_event(&self) -> Option<f64> {
        self.state().last_event()
    }
}
