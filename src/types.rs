/*!
 * Core types for the Code2Summarize traversal
 */

use std::path::PathBuf;

/// Kind of a directory child considered during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory eligible for descent
    Directory,
    /// Regular file eligible for inclusion
    File,
}

/// One child of a listed directory
///
/// Entries are ephemeral: produced by listing a single directory,
/// consumed immediately, never cached into a whole-tree structure.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Base name of the entry
    pub name: String,
    /// Absolute path of the entry
    pub path: PathBuf,
    /// Whether this is a directory or a regular file
    pub kind: EntryKind,
}
