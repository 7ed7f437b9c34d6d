//! Observation hook for [`RingBuffer`](crate::ring_buffer::RingBuffer) state transitions.
//!
//! Observers are a side channel. They see every transition, successful or
//! rejected, after it has been applied, and cannot change the outcome.

/// Buffer accounting at the moment an event was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub capacity: usize,
    pub fill_count: usize,
    pub write_position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingBufferEvent {
    Created(Snapshot),
    Enqueued(Snapshot),
    EnqueueRejected(Snapshot),
    Dequeued { read_position: usize, state: Snapshot },
    DequeueRejected(Snapshot),
    Cleared(Snapshot),
}

impl RingBufferEvent {
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            RingBufferEvent::Created(s)
            | RingBufferEvent::Enqueued(s)
            | RingBufferEvent::EnqueueRejected(s)
            | RingBufferEvent::DequeueRejected(s)
            | RingBufferEvent::Cleared(s) => s,
            RingBufferEvent::Dequeued { state, .. } => state,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RingBufferEvent::EnqueueRejected(_) | RingBufferEvent::DequeueRejected(_)
        )
    }
}

pub trait RingBufferObserver {
    fn on_event(&mut self, event: &RingBufferEvent);
}

/// Observer that ignores every event. Used when none is supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RingBufferObserver for NoopObserver {
    #[inline]
    fn on_event(&mut self, _event: &RingBufferEvent) {}
}

/// Forwards events to `tracing`.
///
/// Construction and clear are logged at `DEBUG`, enqueue and dequeue at
/// `TRACE`, rejected operations at `WARN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RingBufferObserver for TracingObserver {
    fn on_event(&mut self, event: &RingBufferEvent) {
        let s = event.snapshot();
        match event {
            RingBufferEvent::Created(_) => tracing::debug!(
                capacity = s.capacity,
                "ring buffer created"
            ),
            RingBufferEvent::Enqueued(_) => tracing::trace!(
                capacity = s.capacity,
                fill_count = s.fill_count,
                write_position = s.write_position,
                "enqueued"
            ),
            RingBufferEvent::EnqueueRejected(_) => tracing::warn!(
                capacity = s.capacity,
                fill_count = s.fill_count,
                write_position = s.write_position,
                "enqueue rejected, buffer is full"
            ),
            RingBufferEvent::Dequeued { read_position, .. } => tracing::trace!(
                capacity = s.capacity,
                fill_count = s.fill_count,
                write_position = s.write_position,
                read_position = *read_position,
                "dequeued"
            ),
            RingBufferEvent::DequeueRejected(_) => tracing::warn!(
                capacity = s.capacity,
                fill_count = s.fill_count,
                write_position = s.write_position,
                "dequeue rejected, buffer is empty"
            ),
            RingBufferEvent::Cleared(_) => tracing::debug!(
                capacity = s.capacity,
                "ring buffer cleared"
            ),
        }
    }
}

impl<F> RingBufferObserver for F
where
    F: FnMut(&RingBufferEvent),
{
    fn on_event(&mut self, event: &RingBufferEvent) {
        self(event)
    }
}
