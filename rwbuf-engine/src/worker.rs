//! Scan worker
//!
//! The worker is the only place words are extracted. It runs on an ordinary
//! thread, so blocking on the buffer lock is allowed here, unlike in the
//! ticker that wakes it.

use crate::shared::SharedBuffer;
use crate::sink::WordSink;
use log::{debug, info, trace, warn};
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Message sent to the scan worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSignal {
    /// Extract one word
    Tick,
    /// Flush the sink and exit
    Shutdown,
}

/// Counters kept by the worker over its lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Ticks handled
    pub ticks: u64,
    /// Words passed to the sink
    pub words: u64,
    /// Ticks skipped because the lock wait ran out
    pub lock_timeouts: u64,
    /// Words the sink refused
    pub sink_errors: u64,
}

/// Consumes scan signals and feeds words to a sink
pub struct ScanWorker<S: WordSink> {
    buffer: SharedBuffer,
    sink: S,
    signals: Receiver<ScanSignal>,
    lock_timeout: Duration,
    stats: ScanStats,
}

impl<S: WordSink> ScanWorker<S> {
    /// Create a worker reading signals from `signals`
    pub fn new(
        buffer: SharedBuffer,
        sink: S,
        signals: Receiver<ScanSignal>,
        lock_timeout: Duration,
    ) -> Self {
        Self {
            buffer,
            sink,
            signals,
            lock_timeout,
            stats: ScanStats::default(),
        }
    }

    /// Handle signals until `Shutdown` arrives or every sender is gone.
    ///
    /// Returns the sink so the caller can take back collected output.
    pub fn run(mut self) -> (S, ScanStats) {
        info!("scan worker started");
        while let Ok(ScanSignal::Tick) = self.signals.recv() {
            self.scan_once();
        }

        if let Err(e) = self.sink.flush() {
            warn!("word sink failed to flush: {}", e);
        }
        info!(
            "scan worker exiting after {} ticks, {} words",
            self.stats.ticks, self.stats.words
        );
        (self.sink, self.stats)
    }

    /// Extract at most one word and hand it to the sink
    pub fn scan_once(&mut self) {
        self.stats.ticks += 1;
        match self.buffer.next_word(self.lock_timeout) {
            Ok(Some(word)) => match self.sink.emit(&word) {
                Ok(()) => self.stats.words += 1,
                Err(e) => {
                    self.stats.sink_errors += 1;
                    warn!("word sink rejected {} bytes: {}", word.len(), e);
                }
            },
            Ok(None) => trace!("no word available"),
            Err(e) => {
                self.stats.lock_timeouts += 1;
                debug!("tick skipped: {}", e);
            }
        }
    }
}
