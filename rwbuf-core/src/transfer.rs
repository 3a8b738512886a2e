//! Byte-transfer primitive
//!
//! Every byte that enters or leaves the queue goes through a [`Transfer`].
//! The host supplies it; a short return value is how the far side reports
//! that part of the copy faulted.

/// Copies bytes between the queue and an external party
pub trait Transfer {
    /// Copy up to `min(dst.len(), src.len())` bytes from `src` into `dst`.
    ///
    /// Returns the number of bytes actually copied. A value smaller than the
    /// requested count signals a partial failure; it is not a panic.
    fn transfer(&mut self, dst: &mut [u8], src: &[u8]) -> usize;
}

impl<T: Transfer + ?Sized> Transfer for &mut T {
    fn transfer(&mut self, dst: &mut [u8], src: &[u8]) -> usize {
        (**self).transfer(dst, src)
    }
}

/// Plain in-memory copy that never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyTransfer;

impl Transfer for CopyTransfer {
    fn transfer(&mut self, dst: &mut [u8], src: &[u8]) -> usize {
        let count = dst.len().min(src.len());
        dst[..count].copy_from_slice(&src[..count]);
        count
    }
}

/// Transfer that stops copying once a byte budget is spent
///
/// Used to inject partial failures: after `budget` bytes have gone through,
/// every further call copies only what is left of the budget (eventually 0).
#[derive(Debug, Clone, Copy)]
pub struct LimitedTransfer {
    remaining: usize,
}

impl LimitedTransfer {
    /// Create a transfer that copies at most `budget` bytes over its lifetime
    pub fn new(budget: usize) -> Self {
        Self { remaining: budget }
    }

    /// Bytes that can still be copied
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Transfer for LimitedTransfer {
    fn transfer(&mut self, dst: &mut [u8], src: &[u8]) -> usize {
        let count = dst.len().min(src.len()).min(self.remaining);
        dst[..count].copy_from_slice(&src[..count]);
        self.remaining -= count;
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_transfer_copies_shorter_side() {
        let mut dst = [0u8; 3];
        let copied = CopyTransfer.transfer(&mut dst, b"abcdef");
        assert_eq!(copied, 3);
        assert_eq!(&dst, b"abc");
    }

    #[test]
    fn test_limited_transfer_runs_out() {
        let mut transfer = LimitedTransfer::new(4);
        let mut dst = [0u8; 3];

        assert_eq!(transfer.transfer(&mut dst, b"xyz"), 3);
        assert_eq!(transfer.remaining(), 1);

        let mut dst = [0u8; 3];
        assert_eq!(transfer.transfer(&mut dst, b"abc"), 1);
        assert_eq!(&dst, b"a\0\0");
        assert_eq!(transfer.transfer(&mut dst, b"abc"), 0);
    }
}
