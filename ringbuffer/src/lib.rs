pub mod error;
pub mod observer;
pub mod ring_buffer;

pub use error::{Result, RingBufferError};
pub use observer::{NoopObserver, RingBufferEvent, RingBufferObserver, Snapshot, TracingObserver};
pub use ring_buffer::RingBuffer;
