//! Fixed-size chunked reading from files or stdin

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Where input bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// `-` and a missing path both mean stdin
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    /// Open the source for reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => {
                let file = File::open(path)
                    .map_err(|e| CliError::InputError(format!("{}: {}", path.display(), e)))
                    .with_context(|| format!("Failed to open input: {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Read everything from the source
    pub fn read_all(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.open()?
            .read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read input: {}", self))?;
        Ok(bytes)
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Iterator over `chunk_size` pieces of a reader
///
/// Every chunk except the last is exactly `chunk_size` bytes.
pub struct ChunkReader<R: Read> {
    reader: R,
    chunk_size: usize,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Create a chunked reader; `chunk_size` must be non-zero
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size: chunk_size.max(1),
            done: false,
        }
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunk = Vec::with_capacity(self.chunk_size);
        match (&mut self.reader)
            .take(self.chunk_size as u64)
            .read_to_end(&mut chunk)
        {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(n) => {
                if n < self.chunk_size {
                    self.done = true;
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_chunks_have_fixed_size() {
        let reader = ChunkReader::new(Cursor::new(b"abcdefghij".to_vec()), 4);
        let chunks: Vec<Vec<u8>> = reader.map(|c| c.unwrap()).collect();
        assert_eq!(chunks, vec![b"abcd".to_vec(), b"efgh".to_vec(), b"ij".to_vec()]);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail() {
        let reader = ChunkReader::new(Cursor::new(b"abcd".to_vec()), 2);
        assert_eq!(reader.count(), 2);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let mut reader = ChunkReader::new(Cursor::new(Vec::new()), 8);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let source = InputSource::File(PathBuf::from("/nonexistent/input.txt"));
        let err = source.open().err().unwrap();

        assert!(err.to_string().starts_with("Failed to open input"));
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InputError(msg)) if msg.contains("/nonexistent/input.txt")
        ));
    }

    #[test]
    fn test_input_source_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(Path::new("-"))),
            InputSource::Stdin
        );
        assert_eq!(
            InputSource::from_arg(Some(Path::new("in.txt"))),
            InputSource::File(PathBuf::from("in.txt"))
        );
    }

    #[test]
    fn test_read_all_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "some bytes").unwrap();

        let source = InputSource::File(file.path().to_path_buf());
        assert_eq!(source.read_all().unwrap(), b"some bytes");
    }

    #[test]
    fn test_missing_file_error() {
        let source = InputSource::File(PathBuf::from("/nonexistent/input.txt"));
        let err = source.read_all().unwrap_err();
        assert!(err.to_string().contains("Failed to open input"));
    }
}
