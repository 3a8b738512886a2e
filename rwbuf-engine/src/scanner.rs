//! Scanner service: worker plus ticker
//!
//! Spawns the scan worker and the ticker that wakes it, and tears both down
//! again. The ticker is stopped first so no tick races the shutdown signal.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::shared::SharedBuffer;
use crate::sink::WordSink;
use crate::ticker::Ticker;
use crate::worker::{ScanSignal, ScanStats, ScanWorker};
use log::{debug, info};
use std::sync::mpsc::{self, SyncSender};
use std::thread::{self, JoinHandle};

/// Running periodic word scanner
pub struct Scanner<S: WordSink + 'static> {
    signals: SyncSender<ScanSignal>,
    ticker: Option<Ticker>,
    worker: Option<JoinHandle<(S, ScanStats)>>,
}

impl<S: WordSink + 'static> Scanner<S> {
    /// Start scanning `buffer` into `sink` on the cadence in `config`
    pub fn start(buffer: SharedBuffer, sink: S, config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let (signals, receiver) = mpsc::sync_channel(config.signal_capacity);
        let worker = ScanWorker::new(buffer, sink, receiver, config.lock_timeout);

        debug!("spawning scan worker");
        let handle = thread::Builder::new()
            .name("rwbuf-scan".into())
            .spawn(move || worker.run())
            .map_err(|e| EngineError::Spawn(e.to_string()))?;

        debug!("spawning ticker every {:?}", config.scan_interval);
        let ticker = match Ticker::spawn(config.scan_interval, signals.clone()) {
            Ok(ticker) => ticker,
            Err(e) => {
                let _ = signals.send(ScanSignal::Shutdown);
                let _ = handle.join();
                return Err(e);
            }
        };

        info!("scanner started");
        Ok(Self {
            signals,
            ticker: Some(ticker),
            worker: Some(handle),
        })
    }

    /// Request one scan now, in addition to the periodic ticks.
    ///
    /// Blocks only while the worker still has a signal pending.
    pub fn trigger(&self) -> Result<()> {
        self.signals
            .send(ScanSignal::Tick)
            .map_err(|_| EngineError::WorkerPanicked("scan worker"))
    }

    /// Stop both threads and hand back the sink and the worker counters
    pub fn shutdown(mut self) -> Result<(S, ScanStats)> {
        info!("scanner shutdown initiated");
        if let Some(ticker) = self.ticker.take() {
            let ticks = ticker.stop();
            debug!("ticker stopped after {} ticks", ticks);
        }

        let _ = self.signals.send(ScanSignal::Shutdown);
        let handle = self
            .worker
            .take()
            .ok_or(EngineError::WorkerPanicked("scan worker"))?;
        let result = handle
            .join()
            .map_err(|_| EngineError::WorkerPanicked("scan worker"))?;

        info!("scanner shutdown complete");
        Ok(result)
    }
}

impl<S: WordSink + 'static> Drop for Scanner<S> {
    fn drop(&mut self) {
        // Dropping the ticker joins it; the worker exits on its own once the
        // last sender is gone.
        self.ticker.take();
        let _ = self.signals.try_send(ScanSignal::Shutdown);
    }
}
