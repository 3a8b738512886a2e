//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use rwbuf_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Scanner configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Queue feeding and draining configuration
    #[serde(default)]
    pub queue: QueueConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scanner-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Milliseconds between scan ticks
    pub interval_ms: u64,

    /// Longest wait for the buffer lock before a tick is skipped
    pub lock_timeout_ms: u64,

    /// Scan signals that may be pending at once
    pub signal_capacity: usize,

    /// How long `run` keeps scanning after the input is exhausted
    pub linger_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            lock_timeout_ms: 250,
            signal_capacity: 1,
            linger_ms: 3000,
        }
    }
}

/// Queue-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct QueueConfig {
    /// Bytes per enqueued fragment when reading input
    pub chunk_size: usize,

    /// Bytes requested per dequeue when draining
    pub drain_size: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            chunk_size: 4096,
            drain_size: 4096,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Word output format
    pub format: OutputFormat,

    /// Text written after each word in text format
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            separator: "\n".to_string(),
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check value ranges the engine and the commands rely on
    pub fn validate(&self) -> Result<()> {
        if self.queue.chunk_size == 0 {
            return Err(CliError::ConfigError("queue.chunk_size must be at least 1".into()).into());
        }
        if self.queue.drain_size == 0 {
            return Err(CliError::ConfigError("queue.drain_size must be at least 1".into()).into());
        }
        self.to_engine_config()
            .validate()
            .map_err(CliError::from)?;
        Ok(())
    }

    /// Map the `[scan]` section onto the engine configuration
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            scan_interval: Duration::from_millis(self.scan.interval_ms),
            lock_timeout: Duration::from_millis(self.scan.lock_timeout_ms),
            signal_capacity: self.scan.signal_capacity,
        }
    }
}
