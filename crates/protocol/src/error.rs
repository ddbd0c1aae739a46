//! Error types for the dragtags-protocol crate.
//!
//! Domain operations on the tag list are total; the only failure surfaced
//! here is a caller passing an index outside the sequence being reordered.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// An index passed to a reordering helper was outside the sequence.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the sequence.
        len: usize,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
