use thiserror::Error;

pub type Result<T> = std::result::Result<T, RingBufferError>;

/// Errors returned by [`RingBuffer`](crate::ring_buffer::RingBuffer) operations.
///
/// None of them are fatal: they describe boundary conditions the caller is
/// expected to handle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingBufferError {
    /// The buffer was constructed with a capacity of zero.
    #[error("capacity cannot be 0 or negative")]
    InvalidCapacity,

    /// Enqueue attempted with no free slot left.
    #[error("buffer is full")]
    BufferFull,

    /// Dequeue attempted with no live element.
    #[error("buffer is empty")]
    BufferEmpty,
}
