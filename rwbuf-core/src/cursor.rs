//! Persistent word-scan position
//!
//! The cursor names a fragment by id rather than by reference, so it can
//! outlive the fragment it points at. Dequeue calls the repair hooks while
//! it still holds the buffer exclusively; [`WordBuffer`](crate::WordBuffer)
//! additionally re-validates the id before every scan.

use crate::fragment::FragmentId;

/// Where the next scan starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPosition {
    /// Before the oldest fragment
    #[default]
    Unpositioned,
    /// Inside a fragment, `offset` bytes into its live window
    At {
        /// Fragment being scanned
        fragment: FragmentId,
        /// Offset relative to the fragment's live bytes
        offset: usize,
    },
}

/// Scan cursor over a [`FragmentQueue`](crate::FragmentQueue)
#[derive(Debug, Clone, Default)]
pub struct WordCursor {
    position: CursorPosition,
}

impl WordCursor {
    /// Create a cursor positioned before the oldest fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position
    pub fn position(&self) -> CursorPosition {
        self.position
    }

    /// Move to `offset` within `fragment`
    pub fn set(&mut self, fragment: FragmentId, offset: usize) {
        self.position = CursorPosition::At { fragment, offset };
    }

    /// Go back to before the oldest fragment
    pub fn reset(&mut self) {
        self.position = CursorPosition::Unpositioned;
    }

    /// Repair after `id` was unlinked and freed.
    ///
    /// A cursor on `id` moves to the start of `successor`, the next newer
    /// fragment, or becomes unpositioned if there is none.
    pub fn on_retired(&mut self, id: FragmentId, successor: Option<FragmentId>) {
        if let CursorPosition::At { fragment, .. } = self.position {
            if fragment == id {
                self.position = match successor {
                    Some(next) => CursorPosition::At {
                        fragment: next,
                        offset: 0,
                    },
                    None => CursorPosition::Unpositioned,
                };
            }
        }
    }

    /// Repair after `count` bytes were trimmed from the front of `id`.
    pub fn on_trimmed(&mut self, id: FragmentId, count: usize) {
        if let CursorPosition::At { fragment, offset } = &mut self.position {
            if *fragment == id {
                *offset = offset.saturating_sub(count);
            }
        }
    }
}

/// ASCII word separators: space, tab, CR, LF
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// First non-separator at or after `from`
pub(crate) fn seek_non_separator(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| !is_separator(b))
        .map(|i| from + i)
}

/// First separator at or after `from`
pub(crate) fn seek_separator(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| is_separator(b))
        .map(|i| from + i)
}

/// A complete token inside one fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TokenSpan {
    pub start: usize,
    pub end: usize,
    /// Where the following scan should begin
    pub resume: usize,
}

/// Look for a separator-terminated token in `bytes` starting at `from`.
///
/// Tokens never span fragments: if the bytes run out before a terminating
/// separator, the tail is abandoned and `None` is returned.
pub(crate) fn scan_token(bytes: &[u8], from: usize) -> Option<TokenSpan> {
    let start = seek_non_separator(bytes, from)?;
    let end = seek_separator(bytes, start)?;
    let resume = seek_non_separator(bytes, end).unwrap_or(bytes.len());
    Some(TokenSpan { start, end, resume })
}
