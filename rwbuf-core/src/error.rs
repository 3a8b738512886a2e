//! Core error types

use thiserror::Error;

/// Failures of the fragment queue
///
/// An empty queue is never an error: dequeueing from it yields 0 bytes and
/// scanning it yields no word.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Storage for a new fragment could not be reserved
    #[error("failed to allocate {requested} bytes for a new fragment")]
    AllocationFailure {
        /// Number of bytes that were requested
        requested: usize,
    },

    /// The byte-transfer primitive copied fewer bytes than asked
    #[error("partial transfer: copied {copied} of {expected} bytes")]
    PartialTransfer {
        /// Number of bytes the transfer was asked to copy
        expected: usize,
        /// Number of bytes actually copied
        copied: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_transfer_display() {
        let error = CoreError::PartialTransfer {
            expected: 10,
            copied: 4,
        };
        assert_eq!(error.to_string(), "partial transfer: copied 4 of 10 bytes");
    }

    #[test]
    fn test_allocation_failure_display() {
        let error = CoreError::AllocationFailure { requested: 64 };
        assert!(error.to_string().contains("64 bytes"));
    }
}
