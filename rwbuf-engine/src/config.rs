//! Configuration types for the engine

use crate::error::{EngineError, Result};
use std::time::Duration;

/// Scan interval of the original device timer
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_millis(1000);

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Time between scan signals
    pub scan_interval: Duration,
    /// Longest the scanner waits for the buffer lock before skipping a tick
    pub lock_timeout: Duration,
    /// Pending signals the worker may have queued; extra ticks are coalesced
    pub signal_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scan_interval: DEFAULT_SCAN_INTERVAL,
            lock_timeout: Duration::from_millis(250),
            signal_capacity: 1,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with a short interval, for tests and demos
    pub fn fast() -> Self {
        Self {
            scan_interval: Duration::from_millis(10),
            lock_timeout: Duration::from_millis(50),
            signal_capacity: 1,
        }
    }

    /// Set the scan interval
    pub fn with_scan_interval(mut self, interval: Duration) -> Self {
        self.scan_interval = interval;
        self
    }

    /// Set the lock timeout
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// Check that the configuration can drive a scanner
    pub fn validate(&self) -> Result<()> {
        if self.scan_interval.is_zero() {
            return Err(EngineError::InvalidConfig(
                "scan interval must be greater than zero".to_string(),
            ));
        }
        if self.signal_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "signal capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
