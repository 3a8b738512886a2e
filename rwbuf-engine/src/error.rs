//! Engine error types

use rwbuf_core::CoreError;
use std::time::Duration;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Error from the fragment queue
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// The buffer lock was not acquired within the bounded wait
    #[error("buffer lock not acquired within {0:?}")]
    LockTimeout(Duration),

    /// A background thread could not be started
    #[error("failed to spawn thread: {0}")]
    Spawn(String),

    /// A background thread panicked before it could be joined
    #[error("{0} thread panicked")]
    WorkerPanicked(&'static str),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The word sink failed to accept output
    #[error("sink error: {0}")]
    Sink(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Sink(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let error: EngineError = CoreError::AllocationFailure { requested: 8 }.into();
        assert!(matches!(error, EngineError::Core(_)));
        assert!(error.to_string().starts_with("core error:"));
    }

    #[test]
    fn test_lock_timeout_display() {
        let error = EngineError::LockTimeout(Duration::from_millis(250));
        assert_eq!(error.to_string(), "buffer lock not acquired within 250ms");
    }
}
