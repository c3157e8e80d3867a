/*!
 * Utility functions for Code2Summarize
 */

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::error::{Result, SummarizeError};
use crate::filter::FilterConfig;

/// Count the files one run will serialize, for progress tracking.
///
/// Best-effort: callers treat a failure as a missing total, not as a
/// run error.
pub fn count_files(dir: &Path, filter: &FilterConfig, skip: Option<&Path>) -> Result<u64> {
    let dir = fs::canonicalize(dir).map_err(|source| SummarizeError::Traversal {
        path: dir.to_path_buf(),
        source,
    })?;

    let walker = WalkDir::new(&dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || filter.should_descend(&entry.file_name().to_string_lossy())
        });

    let mut count = 0;
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if skip.is_some_and(|skipped| skipped == entry.path()) {
            continue;
        }
        if filter.should_include(&entry.file_name().to_string_lossy()) {
            count += 1;
        }
    }

    Ok(count)
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Default directory names to exclude
pub static DEFAULT_EXCLUDED_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // JS/TS
        "node_modules",
        "dist",
        "build",
        ".next",
        ".angular",
        ".turbo",
        "coverage",
        // Version control
        ".git",
        // .NET
        "bin",
        "obj",
        ".vs",
        // Python
        "__pycache__",
        ".pytest_cache",
        ".mypy_cache",
        ".venv",
        "env",
        "venv",
        // IDEs & editors
        ".vscode",
        ".idea",
        // JVM / Rust
        "target",
        ".gradle",
        "out",
        // Misc
        "logs",
        ".DS_Store",
        ".cache",
    ]
});

/// Default file extensions to include
pub static DEFAULT_EXTENSIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![".cs", ".py", ".jsx", ".ts", ".html"]);
