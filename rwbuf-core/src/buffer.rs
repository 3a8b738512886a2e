//! Queue and cursor as one unit
//!
//! [`WordBuffer`] is the object the exclusion lock guards. Every operation
//! that can invalidate the cursor repairs it before returning, so the
//! cursor is consistent whenever the lock is released.

use crate::cursor::{scan_token, CursorPosition, WordCursor};
use crate::error::Result;
use crate::fragment::{FragmentId, StagedPayload};
use crate::queue::FragmentQueue;
use crate::transfer::Transfer;
use crate::word::Word;
use log::{debug, trace, warn};

/// Point-in-time view of a [`WordBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    /// Live bytes waiting to be dequeued
    pub bytes: usize,
    /// Linked fragments
    pub fragments: usize,
    /// Where the next scan starts
    pub cursor: CursorPosition,
}

/// FIFO byte buffer that can also be scanned for words
#[derive(Debug, Default)]
pub struct WordBuffer {
    queue: FragmentQueue,
    cursor: WordCursor,
}

impl WordBuffer {
    /// Create an empty buffer with an unpositioned cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `src` as a new fragment.
    ///
    /// All-or-nothing: on error no fragment is linked. An empty payload is
    /// accepted as a no-op and returns 0. The cursor is never touched.
    pub fn try_enqueue<T>(&mut self, src: &[u8], transfer: &mut T) -> Result<usize>
    where
        T: Transfer + ?Sized,
    {
        if src.is_empty() {
            return Ok(0);
        }
        let payload = StagedPayload::copy_in(src, transfer)?;
        Ok(self.push_staged(payload))
    }

    /// Link a payload that was copied in ahead of time.
    ///
    /// Returns the number of bytes accepted; an empty payload is dropped.
    pub fn push_staged(&mut self, payload: StagedPayload) -> usize {
        let len = payload.len();
        if len == 0 {
            return 0;
        }
        let id = self.queue.push_staged(payload);
        trace!("enqueued {} bytes as fragment {}", len, id);
        len
    }

    /// Append `src`, reporting failures as 0 bytes accepted
    pub fn enqueue<T>(&mut self, src: &[u8], transfer: &mut T) -> usize
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

    /// Move up to `dst.len()` bytes from the head of the queue into `dst`.
    ///
    /// Stops at the first short transfer and returns what was confirmed so
    /// far; the fragment it stopped in keeps its unconfirmed bytes. Fully
    /// drained fragments are freed.
    pub fn dequeue<T>(&mut self, dst: &mut [u8], transfer: &mut T) -> usize
    where
        T: Transfer + ?Sized,
    {
        let mut total = 0;

        while total < dst.len() {
            let Some(front) = self.queue.front() else {
                break;
            };
            let id = front.id();
            let available = front.len();
            let want = available.min(dst.len() - total);

            let copied = transfer
                .transfer(&mut dst[total..total + want], &front.live()[..want])
                .min(want);
            total += copied;

            if copied == available {
                self.retire_front(id);
            } else if copied > 0 {
                self.queue.trim_front(copied);
                self.cursor.on_trimmed(id, copied);
            }

            if copied < want {
                debug!(
                    "dequeue stopped on partial transfer: {} of {} bytes from fragment {}",
                    copied, want, id
                );
                break;
            }
        }

        total
    }

    fn retire_front(&mut self, id: FragmentId) {
        self.queue.pop_front();
        let successor = self.queue.id_after(id);
        self.cursor.on_retired(id, successor);
        trace!("retired fragment {}", id);
    }

    /// Next complete word at or after the cursor, wrapping to the oldest
    /// fragment after the newest.
    ///
    /// Nothing is consumed. A word is only returned if a separator follows it
    /// within the same fragment; an unterminated fragment tail is skipped.
    /// Returns `None` when the queue is empty or holds no complete word.
    pub fn next_word(&mut self) -> Option<Word> {
        let Some(first) = self.queue.first_id() else {
            self.cursor.reset();
            return None;
        };

        let (mut id, mut offset) = match self.cursor.position() {
            CursorPosition::At { fragment, offset } if self.queue.contains(fragment) => {
                (fragment, offset)
            }
            _ => (first, 0),
        };

        // One full lap plus a rescan of the starting fragment from its head.
        for _ in 0..=self.queue.fragment_count() {
            let fragment = self.queue.get(id)?;
            if let Some(span) = scan_token(fragment.live(), offset) {
                let word = Word::from(&fragment.live()[span.start..span.end]);
                self.cursor.set(id, span.resume);
                return Some(word);
            }
            id = self.queue.id_after(id).unwrap_or(first);
            offset = 0;
        }

        self.cursor.reset();
        None
    }

    /// Current sizes and cursor position
    pub fn stats(&self) -> BufferStats {
        BufferStats {
            bytes: self.queue.len_bytes(),
            fragments: self.queue.fragment_count(),
            cursor: self.cursor.position(),
        }
    }

    /// Live bytes waiting to be dequeued
    pub fn len(&self) -> usize {
        self.queue.len_bytes()
    }

    /// True when no fragment is linked
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Underlying queue
    pub fn queue(&self) -> &FragmentQueue {
        &self.queue
    }

    /// Underlying cursor
    pub fn cursor(&self) -> &WordCursor {
        &self.cursor
    }

    /// Free every fragment and reset the cursor
    pub fn clear(&mut self) {
        self.queue.clear();
        self.cursor.reset();
    }
}
