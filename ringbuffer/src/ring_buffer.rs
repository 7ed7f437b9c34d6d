//! Fixed-capacity FIFO ring buffer.
//!
//! Storage is allocated once by the constructor and reused cyclically.
//! `enqueue` fails with [`RingBufferError::BufferFull`] instead of overwriting,
//! `dequeue` fails with [`RingBufferError::BufferEmpty`] instead of blocking.
//! A failed operation leaves the buffer untouched.
//!
//! The read position is never stored. It is derived from the write position
//! and the fill count, so dequeue only has to decrement the fill count.
//!
//! Mutating methods take `&mut self`; sharing a buffer across threads needs an
//! external lock such as `Mutex<RingBuffer<T>>`.

use crate::error::{Result, RingBufferError};
use crate::observer::{NoopObserver, RingBufferEvent, RingBufferObserver, Snapshot};

#[derive(Debug, Clone)]
pub struct RingBuffer<T, O = NoopObserver> {
    buffer: Vec<T>,
    capacity: usize,
    fill_count: usize,
    // In [0, capacity]. Reset to 0 at the start of the enqueue that finds it
    // at capacity.
    write_position: usize,
    observer: O,
}

impl<T: Default> RingBuffer<T> {
    /// Creates a buffer holding at most `capacity` elements, every slot
    /// initialised to `T::default()`.
    ///
    /// Returns [`RingBufferError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_observer(capacity, NoopObserver)
    }
}

impl<T: Default, O: RingBufferObserver> RingBuffer<T, O> {
    /// Same as [`RingBuffer::new`], reporting every state transition to
    /// `observer`.
    pub fn with_observer(capacity: usize, observer: O) -> Result<Self> {
        if capacity == 0 {
            return Err(RingBufferError::InvalidCapacity);
        }

        let mut ring_buffer = RingBuffer {
            buffer: std::iter::repeat_with(T::default).take(capacity).collect(),
            capacity,
            fill_count: 0,
            write_position: 0,
            observer,
        };
        ring_buffer.notify(RingBufferEvent::Created(ring_buffer.snapshot()));

        Ok(ring_buffer)
    }
}

impl<T, O> RingBuffer<T, O> {
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.fill_count
    }

    pub fn is_empty(&self) -> bool {
        self.fill_count == 0
    }

    pub fn is_full(&self) -> bool {
        self.fill_count == self.capacity
    }

    pub fn available_capacity(&self) -> usize {
        self.capacity - self.fill_count
    }

    /// Slot the next enqueue writes to, before wrapping. Equal to
    /// `capacity()` right after the last slot has been written.
    pub fn write_position(&self) -> usize {
        self.write_position
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn read_position(&self) -> usize {
        (self.write_position + self.capacity - self.fill_count) % self.capacity
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            capacity: self.capacity,
            fill_count: self.fill_count,
            write_position: self.write_position,
        }
    }
}

impl<T, O: RingBufferObserver> RingBuffer<T, O> {
    /// Drops every live element logically. Storage keeps its stale values.
    pub fn clear(&mut self) {
        self.fill_count = 0;
        self.write_position = 0;
        self.notify(RingBufferEvent::Cleared(self.snapshot()));
    }

    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.available_capacity() == 0 {
            self.notify(RingBufferEvent::EnqueueRejected(self.snapshot()));
            return Err(RingBufferError::BufferFull);
        }

        if self.write_position >= self.capacity {
            self.write_position = 0;
        }

        self.buffer[self.write_position] = value;
        self.write_position += 1;
        self.fill_count += 1;
        self.notify(RingBufferEvent::Enqueued(self.snapshot()));

        Ok(())
    }

    fn notify(&mut self, event: RingBufferEvent) {
        self.observer.on_event(&event);
    }
}

impl<T: Clone, O: RingBufferObserver> RingBuffer<T, O> {
    /// Removes and returns the oldest element.
    ///
    /// The slot is not cleared, only excluded from the live range, so the
    /// value is cloned out of storage.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.fill_count == 0 {
            self.notify(RingBufferEvent::DequeueRejected(self.snapshot()));
            return Err(RingBufferError::BufferEmpty);
        }

        let read_position = self.read_position();
        let value = self.buffer[read_position].clone();
        self.fill_count -= 1;
        self.notify(RingBufferEvent::Dequeued {
            read_position,
            state: self.snapshot(),
        });

        Ok(value)
    }

    /// Enqueues every value of `data` in order, or none of them if they do
    /// not all fit.
    pub fn extend_from_slice(&mut self, data: &[T]) -> Result<()> {
        if data.len() > self.available_capacity() {
            self.notify(RingBufferEvent::EnqueueRejected(self.snapshot()));
            return Err(RingBufferError::BufferFull);
        }

        for value in data {
            self.enqueue(value.clone())?;
        }

        Ok(())
    }
}
