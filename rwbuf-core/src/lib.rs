//! Fragment queue with a persistent word cursor
//!
//! This crate holds the deterministic half of rwbuf: a FIFO of byte
//! fragments that a consumer drains destructively, and a word cursor that
//! re-scans the same fragments for whitespace-delimited tokens without
//! consuming anything.
//!
//! # Architecture
//!
//! - [`Fragment`]: one enqueued payload, trimmed from the front in place
//! - [`FragmentQueue`]: oldest-first collection with O(1) id lookup
//! - [`WordCursor`]: queue-relative scan position, repaired on dequeue
//! - [`WordBuffer`]: the queue and cursor as a single owned unit
//!
//! Locking lives one layer up in `rwbuf-engine`; nothing here is shared.
//!
//! # Example
//!
//! ```rust
//! use rwbuf_core::{CopyTransfer, WordBuffer};
//!
//! let mut buffer = WordBuffer::new();
//! let mut transfer = CopyTransfer;
//!
//! buffer.enqueue(b"hello world ", &mut transfer);
//! assert_eq!(buffer.next_word().unwrap().as_bytes(), b"hello");
//! assert_eq!(buffer.next_word().unwrap().as_bytes(), b"world");
//! // Nothing is consumed by scanning, so the cursor wraps around.
//! assert_eq!(buffer.next_word().unwrap().as_bytes(), b"hello");
//!
//! let mut out = [0u8; 5];
//! assert_eq!(buffer.dequeue(&mut out, &mut transfer), 5);
//! assert_eq!(&out, b"hello");
//! ```

#![warn(missing_docs)]

pub mod buffer;
pub mod cursor;
pub mod error;
pub mod fragment;
pub mod queue;
pub mod transfer;
pub mod word;

pub use buffer::{BufferStats, WordBuffer};
pub use cursor::{is_separator, CursorPosition, WordCursor};
pub use error::{CoreError, Result};
pub use fragment::{Fragment, FragmentId, StagedPayload};
pub use queue::FragmentQueue;
pub use transfer::{CopyTransfer, LimitedTransfer, Transfer};
pub use word::Word;
