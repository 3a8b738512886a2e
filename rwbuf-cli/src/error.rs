//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or unreadable
    InputError(String),
    /// Configuration file could not be used
    ConfigError(String),
    /// Failure reported by the engine
    EngineError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputError(msg) => write!(f, "Input error: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::EngineError(msg) => write!(f, "Engine error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<rwbuf_engine::EngineError> for CliError {
    fn from(err: rwbuf_engine::EngineError) -> Self {
        CliError::EngineError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let error = CliError::InputError("missing.txt".to_string());
        assert_eq!(error.to_string(), "Input error: missing.txt");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_engine_error_conversion() {
        let engine = rwbuf_engine::EngineError::InvalidConfig("zero interval".to_string());
        let error = CliError::from(engine);
        assert_eq!(
            error.to_string(),
            "Engine error: invalid configuration: zero interval"
        );
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::InputError("x".to_string()).into());
        assert!(result.unwrap_err().to_string().contains("Input error"));
    }
}
