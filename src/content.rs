/*!
 * File Contents section: one labeled, fenced block per included file
 */

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use indicatif::ProgressBar;

use crate::config::ReadErrorPolicy;
use crate::error::{Result, SummarizeError};
use crate::filter::{extension_of, FilterConfig};
use crate::report::FileReportInfo;
use crate::sink::OutputSink;
use crate::types::EntryKind;
use crate::walk;

const SEPARATOR_WIDTH: usize = 80;

/// Statistics gathered while serializing file contents
#[derive(Debug, Clone, Default)]
pub struct SerializerStatistics {
    /// Number of files written to the document
    pub files_processed: usize,
    /// Total number of lines across all written files
    pub total_lines: usize,
    /// Total number of characters across all written files
    pub total_chars: usize,
    /// Per-file details keyed by root-relative path
    pub file_details: BTreeMap<String, FileReportInfo>,
}

/// Writes the File Contents section directly to the sink.
///
/// Siblings are visited in the same lexicographic order as the tree,
/// so the two sections list files identically.
pub struct ContentSerializer<'a> {
    filter: &'a FilterConfig,
    policy: ReadErrorPolicy,
    progress: ProgressBar,
    skip: Option<&'a Path>,
    statistics: SerializerStatistics,
}

impl<'a> ContentSerializer<'a> {
    pub fn new(
        filter: &'a FilterConfig,
        policy: ReadErrorPolicy,
        progress: ProgressBar,
        skip: Option<&'a Path>,
    ) -> Self {
        Self {
            filter,
            policy,
            progress,
            skip,
            statistics: SerializerStatistics::default(),
        }
    }

    /// Consume the serializer and return the accumulated statistics.
    pub fn into_statistics(self) -> SerializerStatistics {
        self.statistics
    }

    /// Walk `root` depth-first and append one block per included file.
    pub fn serialize(&mut self, root: &Path, sink: &mut OutputSink) -> Result<()> {
        self.serialize_dir(root, root, sink)
    }

    fn serialize_dir(&mut self, root: &Path, dir: &Path, sink: &mut OutputSink) -> Result<()> {
        for entry in walk::list_children(dir, self.filter, self.skip)? {
            match entry.kind {
                EntryKind::Directory => self.serialize_dir(root, &entry.path, sink)?,
                EntryKind::File => self.serialize_file(root, &entry.name, &entry.path, sink)?,
            }
        }
        Ok(())
    }

    fn serialize_file(
        &mut self,
        root: &Path,
        name: &str,
        path: &Path,
        sink: &mut OutputSink,
    ) -> Result<()> {
        self.progress.inc(1);
        self.progress.set_message(format!("Current file: {name}"));

        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        let content = self.read_content(path)?;
        let extension = extension_of(name);
        let tag = extension.strip_prefix('.').unwrap_or(&extension);

        sink.write(&format!("## File: {name}\n"))?;
        sink.write(&format!("### Path: {relative}\n"))?;
        sink.write("### Content:\n")?;
        sink.write(&format!("```{tag}\n"))?;
        sink.write(&content)?;
        sink.write("\n```\n")?;
        sink.write(&format!("### End of file: {name}\n\n"))?;
        sink.write(&format!("{}\n\n", "-".repeat(SEPARATOR_WIDTH)))?;

        let lines = content.lines().count();
        let chars = content.chars().count();
        self.statistics.files_processed += 1;
        self.statistics.total_lines += lines;
        self.statistics.total_chars += chars;
        self.statistics
            .file_details
            .insert(relative, FileReportInfo { lines, chars });

        Ok(())
    }

    // Read as bytes first so a decode failure is reported with the
    // path rather than swallowed into a lossy conversion.
    fn read_content(&self, path: &Path) -> Result<String> {
        let error = match fs::read(path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => return Ok(text),
                Err(_) => SummarizeError::InvalidUtf8 {
                    path: path.to_path_buf(),
                },
            },
            Err(source) => SummarizeError::FileRead {
                path: path.to_path_buf(),
                source,
            },
        };

        match self.policy {
            ReadErrorPolicy::Abort => Err(error),
            ReadErrorPolicy::Skip => {
                log::warn!("{error}");
                Ok(format!("[content unavailable: {error}]"))
            }
        }
    }
}
