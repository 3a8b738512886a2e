//! A single enqueued run of bytes

use crate::error::{CoreError, Result};
use crate::transfer::Transfer;
use std::fmt;

/// Sequence tag of a fragment
///
/// Tags are handed out in enqueue order and never reused, so a tag that
/// falls behind the queue head names a fragment that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FragmentId(pub(crate) u64);

impl FragmentId {
    /// Raw sequence number
    pub fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        FragmentId(self.0 + 1)
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owned bytes with a live window that shrinks from the front
///
/// Invariant: `offset + length <= bytes.len()`.
pub struct Fragment {
    id: FragmentId,
    bytes: Box<[u8]>,
    offset: usize,
    length: usize,
}

/// Payload copied in from the producer but not yet linked
///
/// Staging does the allocation and the fallible transfer, so it can run
/// before the buffer lock is taken.
#[derive(Debug)]
pub struct StagedPayload(Box<[u8]>);

impl StagedPayload {
    /// Copy `src` into a fresh allocation through `transfer`.
    ///
    /// The copy is all-or-nothing: a short transfer drops the allocation and
    /// reports [`CoreError::PartialTransfer`].
    pub fn copy_in<T>(src: &[u8], transfer: &mut T) -> Result<Self>
    where
        T: Transfer + ?Sized,
    {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(src.len())
            .map_err(|_| CoreError::AllocationFailure {
                requested: src.len(),
            })?;
        bytes.resize(src.len(), 0);

        let copied = transfer.transfer(&mut bytes, src);
        if copied != src.len() {
            return Err(CoreError::PartialTransfer {
                expected: src.len(),
                copied,
            });
        }

        Ok(Self(bytes.into_boxed_slice()))
    }

    /// Staged byte count
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for an empty payload
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Fragment {
    pub(crate) fn from_staged(id: FragmentId, payload: StagedPayload) -> Self {
        let bytes = payload.0;
        Self {
            id,
            length: bytes.len(),
            bytes,
            offset: 0,
        }
    }

    /// Sequence tag assigned at enqueue
    pub fn id(&self) -> FragmentId {
        self.id
    }

    /// Bytes not yet consumed
    pub fn live(&self) -> &[u8] {
        &self.bytes[self.offset..self.offset + self.length]
    }

    /// Number of live bytes
    pub fn len(&self) -> usize {
        self.length
    }

    /// True once every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Size of the backing allocation
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Drop `count` bytes from the front of the live window without copying.
    pub fn trim_front(&mut self, count: usize) {
        debug_assert!(count <= self.length, "trim past end of fragment");
        let count = count.min(self.length);
        self.offset += count;
        self.length -= count;
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("id", &self.id)
            .field("offset", &self.offset)
            .field("length", &self.length)
            .field("capacity", &self.bytes.len())
            .finish()
    }
}
