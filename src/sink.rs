/*!
 * Append-only output destination
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SummarizeError};

/// Buffered, append-only sink over the output document.
///
/// Created once per run with truncate semantics and closed exactly
/// once. A second `close` is a no-op so the error path can close
/// unconditionally, even when no writes ever happened.
pub struct OutputSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl OutputSink {
    /// Open the sink, truncating any pre-existing document.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| SummarizeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Path of the document this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `text` to the document. Writing to a closed sink is an
    /// error.
    pub fn write(&mut self, text: &str) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| SummarizeError::Write {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::Other, "sink already closed"),
        })?;
        writer
            .write_all(text.as_bytes())
            .map_err(|source| SummarizeError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Flush and release the file handle. Safe to call more than once.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|source| SummarizeError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
