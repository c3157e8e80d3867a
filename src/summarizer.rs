/*!
 * Run orchestration: open the sink, write both sections, close once
 */

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::config::Config;
use crate::content::{ContentSerializer, SerializerStatistics};
use crate::error::{Result, SummarizeError};
use crate::sink::OutputSink;
use crate::tree::TreeBuilder;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Where the document was written
    pub output_file: PathBuf,
    /// Statistics from the content pass
    pub statistics: SerializerStatistics,
}

/// Placement rule for the output document: it always lands beside the
/// summarized directory, named `<baseName>_Code2Summarize.txt`.
pub fn summary_output_path(target_dir: &Path) -> Result<PathBuf> {
    let name = target_dir.file_name().ok_or_else(|| {
        SummarizeError::Config(format!(
            "cannot derive an output name for {}",
            target_dir.display()
        ))
    })?;
    let mut file_name = name.to_string_lossy().into_owned();
    file_name.push_str("_Code2Summarize.txt");
    Ok(target_dir.join(file_name))
}

/// Drives one summarization run end to end.
pub struct Summarizer {
    config: Config,
    progress: ProgressBar,
}

impl Summarizer {
    pub fn new(config: Config, progress: ProgressBar) -> Self {
        Self { config, progress }
    }

    /// Produce the summary document for the configured directory.
    ///
    /// The tree section is fully written before the content pass
    /// starts, and the sink is closed exactly once, on the error path
    /// too.
    pub fn run(&self) -> Result<RunSummary> {
        let root = fs::canonicalize(&self.config.target_dir).map_err(|e| {
            SummarizeError::Config(format!(
                "no usable root directory {}: {e}",
                self.config.target_dir.display()
            ))
        })?;
        let output_path = summary_output_path(&root)?;

        let mut sink = OutputSink::create(&output_path)?;
        let result = self.write_document(&root, &output_path, &mut sink);
        let closed = sink.close();
        let statistics = result?;
        closed?;

        Ok(RunSummary {
            output_file: output_path,
            statistics,
        })
    }

    fn write_document(
        &self,
        root: &Path,
        output_path: &Path,
        sink: &mut OutputSink,
    ) -> Result<SerializerStatistics> {
        log::debug!("building project structure for {}", root.display());
        let tree = TreeBuilder::new(&self.config.filter, Some(output_path)).build(root)?;
        sink.write("# Project Structure\n\n")?;
        sink.write(&tree)?;
        sink.write("\n\n# File Contents\n\n")?;

        log::debug!("serializing file contents into {}", sink.path().display());
        let mut serializer = ContentSerializer::new(
            &self.config.filter,
            self.config.read_error_policy,
            self.progress.clone(),
            Some(output_path),
        );
        serializer.serialize(root, sink)?;

        Ok(serializer.into_statistics())
    }
}

/// Single entry point for hosts that do not need progress reporting.
pub fn run(config: Config) -> Result<RunSummary> {
    Summarizer::new(config, ProgressBar::hidden()).run()
}
