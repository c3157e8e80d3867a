/*!
 * Shared directory listing for the tree and content passes
 *
 * Both serializations consume the same listing, so the set of files
 * shown in the tree is structurally identical to the set of files
 * that receive a content block.
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;
use crate::filter::FilterConfig;
use crate::types::{Entry, EntryKind};

/// List the immediate children of `dir`, apply the filter, and return
/// the survivors sorted lexicographically by name.
///
/// `skip` is the output document itself; it must never appear in its
/// own summary, or a second run would summarize the first run's
/// output. Symlinks are followed, matching a stat-based walk. A child
/// that cannot be stat'ed aborts the listing with the offending path
/// attached.
pub fn list_children(
    dir: &Path,
    filter: &FilterConfig,
    skip: Option<&Path>,
) -> Result<Vec<Entry>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for child in walker {
        let child = child?;
        let name = child.file_name().to_string_lossy().into_owned();

        if child.file_type().is_dir() {
            if filter.should_descend(&name) {
                entries.push(Entry {
                    name,
                    path: child.into_path(),
                    kind: EntryKind::Directory,
                });
            }
        } else if child.file_type().is_file() {
            if skip.is_some_and(|skipped| skipped == child.path()) {
                continue;
            }
            if filter.should_include(&name) {
                entries.push(Entry {
                    name,
                    path: child.into_path(),
                    kind: EntryKind::File,
                });
            }
        }
    }

    Ok(entries)
}
