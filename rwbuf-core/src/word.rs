//! Owned token copies

use std::fmt;

/// A whitespace-delimited token copied out of the buffer
///
/// The bytes are a snapshot; later dequeues do not affect them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(Vec<u8>);

impl Word {
    /// Wrap raw token bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Token bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the token bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Token length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for scanned words; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token as text, replacing invalid UTF-8
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl From<&[u8]> for Word {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_display_is_lossy() {
        let word = Word::new(vec![b'o', b'k', 0xff]);
        assert_eq!(word.len(), 3);
        assert_eq!(word.to_string(), "ok\u{fffd}");
        assert_eq!(word.to_string_lossy(), "ok\u{fffd}");
    }
}
