//! The single exclusion domain
//!
//! Enqueue, dequeue and word scanning all go through one
//! [`parking_lot::Mutex`]. Guards are released with
//! [`MutexGuard::unlock_fair`], which hands the lock to the longest waiter,
//! so none of the three paths can starve the others.

use crate::error::{EngineError, Result};
use log::{debug, warn};
use parking_lot::{Mutex, MutexGuard};
use rwbuf_core::{BufferStats, StagedPayload, Transfer, Word, WordBuffer};
use std::sync::Arc;
use std::time::Duration;

/// Cloneable handle to a lock-protected [`WordBuffer`]
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<WordBuffer>>,
}

impl SharedBuffer {
    /// Create an empty shared buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `src` as one fragment.
    ///
    /// The copy through `transfer` happens before the lock is taken; only
    /// linking the finished fragment is serialised.
    pub fn try_enqueue<T>(&self, src: &[u8], transfer: &mut T) -> Result<usize>
    where
        T: Transfer + ?Sized,
    {
        if src.is_empty() {
            return Ok(0);
        }
        let payload = StagedPayload::copy_in(src, transfer)?;

        let mut guard = self.inner.lock();
        let accepted = guard.push_staged(payload);
        MutexGuard::unlock_fair(guard);
        Ok(accepted)
    }

    /// Append `src`, reporting any failure as 0 bytes accepted
    pub fn enqueue<T>(&self, src: &[u8], transfer: &mut T) -> usize
    where
        T: Transfer + ?Sized,
    {
        match self.try_enqueue(src, transfer) {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("enqueue of {} bytes rejected: {}", src.len(), e);
                0
            }
        }
    }

    /// Drain up to `dst.len()` bytes, oldest first
    pub fn dequeue<T>(&self, dst: &mut [u8], transfer: &mut T) -> usize
    where
        T: Transfer + ?Sized,
    {
        let mut guard = self.inner.lock();
        let transferred = guard.dequeue(dst, transfer);
        MutexGuard::unlock_fair(guard);
        transferred
    }

    /// Scan for the next word, waiting at most `timeout` for the lock
    pub fn next_word(&self, timeout: Duration) -> Result<Option<Word>> {
        let Some(mut guard) = self.inner.try_lock_for(timeout) else {
            debug!("scanner gave up on the buffer lock after {:?}", timeout);
            return Err(EngineError::LockTimeout(timeout));
        };
        let word = guard.next_word();
        MutexGuard::unlock_fair(guard);
        Ok(word)
    }

    /// Current sizes and cursor position
    pub fn stats(&self) -> BufferStats {
        let guard = self.inner.lock();
        let stats = guard.stats();
        MutexGuard::unlock_fair(guard);
        stats
    }

    /// Free every fragment and reset the cursor
    pub fn clear(&self) {
        let mut guard = self.inner.lock();
        guard.clear();
        MutexGuard::unlock_fair(guard);
    }

    /// Run `f` with exclusive access to the buffer
    pub fn with_buffer<R>(&self, f: impl FnOnce(&mut WordBuffer) -> R) -> R {
        let mut guard = self.inner.lock();
        let result = f(&mut guard);
        MutexGuard::unlock_fair(guard);
        result
    }
}

impl std::fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(buffer) => f
                .debug_struct("SharedBuffer")
                .field("stats", &buffer.stats())
                .finish(),
            None => f
                .debug_struct("SharedBuffer")
                .field("stats", &"<locked>")
                .finish(),
        }
    }
}
