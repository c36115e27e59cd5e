use crate::{
    dsp::events::{EventCursor, EventList, EventStream},
    error::GraphError,
    graph::{
        module::{Inputs, Module, Render},
        node::RenderCtx,
    },
    sequencing::{note::NoteEvent, tuning::Tuning},
};

/// Note cursor and tuning behind a [`NoteFreq`] node.
pub struct NotePitch {
    cursor: EventCursor<NoteEvent>,
    tuning: Box<dyn Tuning>,
    current: Option<(i32, f32)>,
}

impl NotePitch {
    /// Key of the most recently started note.
    pub fn current_key(&self) -> Option<i32> {
        self.current.map(|(key, _)| key)
    }

    fn frequency_of(&mut self, note: Option<NoteEvent>) -> f32 {
        let Some(note) = note else { return 0.0 };
        match self.current {
            Some((key, hz)) if key == note.key => hz,
            _ => {
                let hz = self.tuning.frequency(note.key);
                self.current = Some((note.key, hz));
                hz
            }
        }
    }
}

/// Frequency in Hz of the most recently started note, 0 before the first.
///
/// Durations are ignored here: the pitch holds until the next onset, and
/// silencing is left to an envelope driven by the release times.
pub type NoteFreq = Module<NotePitch>;

impl Render for NotePitch {
    const NAME: &'static str = "note_freq";

    fn render_block(
        &mut self,
        _inputs: &Inputs<'_>,
        out: &mut [f32],
        ctx: &RenderCtx,
    ) -> Result<(), GraphError> {
        for (i, sample) in out.iter_mut().enumerate() {
            let note = self.cursor.advance_to(ctx.sample_time(i));
            *sample = self.frequency_of(note);
        }
        Ok(())
    }
}

impl Module<NotePitch> {
    /// Fails with `UnorderedEvents` unless onsets are non-decreasing.
    pub fn new(notes: Vec<NoteEvent>, tuning: impl Tuning + 'static) -> Result<Self, GraphError> {
        Ok(Self::from_stream(EventList::new(notes)?, tuning))
    }

    pub fn from_stream(
        stream: impl EventStream<NoteEvent> + 'static,
        tuning: impl Tuning + 'static,
    ) -> Self {
        Module::from_parts(
            NotePitch {
                cursor: EventCursor::new(stream),
                tuning: Box::new(tuning),
                current: None,
            },
            Vec::new(),
        )
    }
}
