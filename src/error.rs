//! Error types for buffer access

use std::fmt;

/// Reasons a [`crate::SampleBuffer`] operation can't produce a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The requested index lies outside the active part of the buffer
    OutOfRange {
        /// Index that was requested
        index: usize,
        /// Active length of the buffer at the time
        len: usize,
    },

    /// The operation needs samples in insertion order, but the buffer has been reordered
    /// (by [`crate::SampleBuffer::median`] or [`crate::SampleBuffer::sorted_element`])
    /// or is partway through overwriting stale data
    NotChronological,

    /// A buffer was requested with a capacity of zero
    ZeroCapacity,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::OutOfRange { index, len } => {
                write!(f, "index {} is out of range for buffer of length {}", index, len)
            }
            BufferError::NotChronological => {
                write!(f, "buffer contents are no longer in insertion order")
            }
            BufferError::ZeroCapacity => write!(f, "buffer capacity must be non-zero"),
        }
    }
}

impl std::error::Error for BufferError {}

/// Result type for buffer operations
pub type Result<T> = std::result::Result<T, BufferError>;
