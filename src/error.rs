//! Error types for the Sieva library.
//!
//! All fallible operations in Sieva return [`Result`], whose error type is the
//! [`SievaError`] enum.
//!
//! # Examples
//!
//! ```
//! use sieva::error::{Result, SievaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SievaError::analysis("invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use anyhow;
use thiserror::Error;

/// The main error type for Sieva operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum SievaError {
    /// I/O errors raised while reading a text stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stop-word or input file could not be opened.
    #[error("cannot open {path}: {source}")]
    FileUnreadable {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A scanned term exceeded the tokenizer's maximum term length.
    ///
    /// Scanning may resume after this error; the next call picks up at the
    /// separator following the oversized run.
    #[error("term of {len} bytes exceeds the maximum of {max}")]
    TermTooLong {
        /// Length the term had reached when the bound was hit.
        len: usize,
        /// The configured maximum term length.
        max: usize,
    },

    /// Analysis-related errors (tokenization, automaton construction, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`SievaError`].
pub type Result<T> = std::result::Result<T, SievaError>;

impl SievaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SievaError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SievaError::Other(msg.into())
    }

    /// Create a `FileUnreadable` error for the given path.
    pub fn file_unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SievaError::FileUnreadable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SievaError::analysis("bad token stream");
        assert_eq!(error.to_string(), "Analysis error: bad token stream");

        let error = SievaError::TermTooLong { len: 300, max: 255 };
        assert_eq!(
            error.to_string(),
            "term of 300 bytes exceeds the maximum of 255"
        );
    }

    #[test]
    fn test_file_unreadable_display() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let error = SievaError::file_unreadable("/tmp/missing.txt", io_error);
        assert!(error.to_string().contains("/tmp/missing.txt"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        let error = SievaError::from(io_error);

        match error {
            SievaError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
