use tracing::warn;

use crate::error::GraphError;

/// Anything stamped with a time in seconds.
pub trait Timed: Copy + Send {
    fn time(&self) -> f64;
}

impl Timed for f64 {
    fn time(&self) -> f64 {
        *self
    }
}

/// Forward-only source of time-ordered events.
///
/// `None` means "nothing available now". A finished list keeps returning
/// `None`; a live queue may produce more events later.
pub trait EventStream<E>: Send {
    fn next_event(&mut self) -> Option<E>;
}

/// A pre-recorded, validated event sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct EventList<E> {
    events: Vec<E>,
    next: usize,
}

impl<E: Timed> EventList<E> {
    /// Fails with `UnorderedEvents` unless times are non-decreasing.
    pub fn new(events: Vec<E>) -> Result<Self, GraphError> {
        for pair in events.windows(2) {
            let (previous, next) = (pair[0].time(), pair[1].time());
            // also rejects NaN
            if !(next >= previous) {
                return Err(GraphError::UnorderedEvents { previous, next });
            }
        }
        Ok(Self { events, next: 0 })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.events.len() - self.next
    }
}

impl<E: Timed> EventStream<E> for EventList<E> {
    fn next_event(&mut self) -> Option<E> {
        let event = self.events.get(self.next).copied()?;
        self.next += 1;
        Some(event)
    }
}

#[cfg(feature = "rtrb")]
impl<E: Send> EventStream<E> for rtrb::Consumer<E> {
    fn next_event(&mut self) -> Option<E> {
        self.pop().ok()
    }
}

/*
Merging Events With the Sample Clock
====================================

Both the sample clock and the event stream move forward only. The cursor
keeps one event of lookahead:

    pending   next event not yet reached by the clock
    last      most recent event at or before the clock

For each sample time, in ascending order:

    while pending.time <= time:
        last = pending
        pending = stream.next()

The cursor never rewinds. Once the stream runs dry `last` stays frozen.
*/

/// One-event lookahead over an [`EventStream`].
pub struct EventCursor<E> {
    stream: Box<dyn EventStream<E>>,
    pending: Option<E>,
    last: Option<E>,
}

impl<E: Timed> EventCursor<E> {
    pub fn new(stream: impl EventStream<E> + 'static) -> Self {
        Self {
            stream: Box::new(stream),
            pending: None,
            last: None,
        }
    }

    /// Most recent event fired so far.
    pub fn last(&self) -> Option<E> {
        self.last
    }

    /// Fire every event at or before `time` and return the latest one.
    pub fn advance_to(&mut self, time: f64) -> Option<E> {
        loop {
            if self.pending.is_none() {
                self.pending = self.stream.next_event();
            }
            let Some(event) = self.pending else { break };
            if event.time() > time {
                break;
            }

            self.pending = None;
            match self.last {
                Some(last) if event.time() < last.time() => {
                    warn!(
                        event = event.time(),
                        last = last.time(),
                        "dropping event older than the last fired one"
                    );
                }
                _ => self.last = Some(event),
            }
        }
        self.last
    }
}
