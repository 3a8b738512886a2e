//! Periodic scan trigger
//!
//! The ticker only posts [`ScanSignal::Tick`] into a bounded channel. If
//! the worker has not picked up the previous tick yet, the new one is
//! dropped rather than queued, so a slow sink never builds a backlog.

use crate::error::{EngineError, Result};
use crate::worker::ScanSignal;
use log::{debug, trace};
use std::sync::mpsc::{self, RecvTimeoutError, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Background thread that signals the scan worker on a fixed cadence
pub struct Ticker {
    stop: Option<SyncSender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl Ticker {
    /// Start ticking every `interval` into `signals`
    pub fn spawn(interval: Duration, signals: SyncSender<ScanSignal>) -> Result<Self> {
        let (stop_tx, stop_rx) = mpsc::sync_channel::<()>(1);
        let handle = thread::Builder::new()
            .name("rwbuf-tick".into())
            .spawn(move || tick_loop(interval, stop_rx, signals))
            .map_err(|e| EngineError::Spawn(e.to_string()))?;

        Ok(Self {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Stop ticking and wait for the thread. Returns the number of ticks sent.
    pub fn stop(mut self) -> u64 {
        self.halt()
    }

    fn halt(&mut self) -> u64 {
        if let Some(stop) = self.stop.take() {
            let _ = stop.try_send(());
        }
        match self.handle.take() {
            Some(handle) => handle.join().unwrap_or(0),
            None => 0,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.halt();
    }
}

fn tick_loop(
    interval: Duration,
    stop: mpsc::Receiver<()>,
    signals: SyncSender<ScanSignal>,
) -> u64 {
    let mut sent = 0;
    loop {
        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => match signals.try_send(ScanSignal::Tick) {
                Ok(()) => {
                    sent += 1;
                    trace!("tick {}", sent);
                }
                Err(TrySendError::Full(_)) => debug!("scan worker busy, tick coalesced"),
                Err(TrySendError::Disconnected(_)) => break,
            },
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    sent
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_ticker_sends_ticks() {
        let (tx, rx) = mpsc::sync_channel(8);
        let ticker = Ticker::spawn(Duration::from_millis(5), tx).unwrap();

        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first, ScanSignal::Tick);
        assert!(ticker.stop() >= 1);
    }

    #[test]
    fn test_ticker_coalesces_when_full() {
        let (tx, rx) = mpsc::sync_channel(1);
        let ticker = Ticker::spawn(Duration::from_millis(1), tx).unwrap();

        thread::sleep(Duration::from_millis(50));
        ticker.stop();

        // Only one tick fits; the rest were dropped, not queued.
        assert_eq!(rx.try_recv(), Ok(ScanSignal::Tick));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_stop_is_prompt() {
        let (tx, _rx) = mpsc::sync_channel(1);
        let ticker = Ticker::spawn(Duration::from_secs(60), tx).unwrap();

        let started = Instant::now();
        assert_eq!(ticker.stop(), 0);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_ticker_exits_when_worker_gone() {
        let (tx, rx) = mpsc::sync_channel(1);
        let ticker = Ticker::spawn(Duration::from_millis(1), tx).unwrap();
        drop(rx);

        thread::sleep(Duration::from_millis(20));
        // The thread already left its loop; stop just joins it.
        ticker.stop();
    }
}
