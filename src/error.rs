//! Error type for conversion.
//!
//! Malformed Markdown is never an error: every block treats end of input as
//! its terminator. Only I/O can fail.

use std::io;
use std::path::PathBuf;

/// Errors produced while opening or streaming a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be opened. Displayed as `path: reason`.
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading the input or writing the output failed mid-stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display() {
        let err = Error::Open {
            path: PathBuf::from("missing.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "missing.md: No such file or directory");
    }

    #[test]
    fn test_io_error_from() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }
}
