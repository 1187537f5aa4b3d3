use thiserror::Error;

/// Error types for the checked `RingBuffer` accessors
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RingBufferError {
    /// Operation attempted on an empty buffer
    #[error("Ring buffer is empty")]
    Empty,
    /// Logical index is beyond the number of items held
    #[error("Index out of bounds: index {index} is beyond buffer length {length}")]
    IndexOutOfBounds {
        /// Logical index that was accessed
        index: usize,
        /// Number of items currently held
        length: usize,
    },
}
