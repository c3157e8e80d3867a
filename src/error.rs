//! Global error handling for code2summarize
//!
//! Every failure bubbles up to the invocation boundary untouched; the
//! only thing silently skipped is normal filtering.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Global error type for code2summarize operations
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// No usable root path or bad host configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A directory could not be listed or an entry could not be stat'ed
    #[error("Failed to traverse {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file's bytes could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file's bytes are not valid UTF-8
    #[error("File is not valid UTF-8: {}", .path.display())]
    InvalidUtf8 { path: PathBuf },

    /// The output sink rejected a write
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<walkdir::Error> for SummarizeError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop detected"));
        Self::Traversal { path, source }
    }
}

/// Specialized Result type for code2summarize operations
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Creates a SummarizeError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::SummarizeError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
