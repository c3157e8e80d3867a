/*!
 * Inclusion policy shared by both output sections
 *
 * The filter performs no I/O: it answers membership questions about
 * directory names and file extensions, nothing else.
 */

use std::collections::HashSet;

/// Immutable filter policy for one run
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Directory base names skipped entirely (exact, case-sensitive)
    excluded_dirs: HashSet<String>,
    /// Allowed file extensions, lower-cased and dot-prefixed
    allowed_extensions: HashSet<String>,
}

impl FilterConfig {
    /// Build a filter from raw lists.
    ///
    /// Extensions are normalized to the lower-cased, dot-prefixed form
    /// (`"RS"` becomes `".rs"`). The empty string is preserved as the
    /// explicit allow-list entry for files without an extension.
    pub fn new<D, E>(excluded_dirs: D, allowed_extensions: E) -> Self
    where
        D: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        Self {
            excluded_dirs: excluded_dirs.into_iter().collect(),
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(normalize_extension)
                .collect(),
        }
    }

    /// Whether traversal may enter a directory with this base name.
    ///
    /// Exact string match against the exclusion set, no glob or regex
    /// semantics.
    pub fn should_descend(&self, dir_name: &str) -> bool {
        !self.excluded_dirs.contains(dir_name)
    }

    /// Whether a file with this base name is included in the summary.
    pub fn should_include(&self, file_name: &str) -> bool {
        self.allowed_extensions.contains(&extension_of(file_name))
    }
}

/// Extension of a file name: the substring from the last `.`,
/// lower-cased.
///
/// `"README"` and `".gitignore"` have no extension and yield `""`;
/// `"a.tar.gz"` yields `".gz"`; `"foo."` yields `"."`.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        None | Some(0) => String::new(),
        Some(index) => file_name[index..].to_lowercase(),
    }
}

fn normalize_extension(ext: String) -> String {
    if ext.is_empty() {
        return ext;
    }
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}
