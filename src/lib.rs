/*!
 * Code2Summarize - Flatten a project directory into a single shareable text summary
 *
 * This library walks a directory tree and writes one text document:
 * an ASCII tree of the filtered structure followed by the full content
 * of every matching file, each fenced and annotated with its path.
 */

pub mod clipboard;
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod report;
pub mod sink;
pub mod summarizer;
pub mod tree;
pub mod types;
pub mod utils;
pub mod walk;


// Re-export main components for easier access
pub use config::{Args, Config, ReadErrorPolicy};
pub use content::{ContentSerializer, SerializerStatistics};
pub use error::{Result, SummarizeError};
pub use filter::FilterConfig;
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use sink::OutputSink;
pub use summarizer::{run, summary_output_path, RunSummary, Summarizer};
pub use tree::TreeBuilder;
pub use types::{Entry, EntryKind};
pub use utils::{count_files, format_file_size};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
