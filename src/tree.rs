/*!
 * ASCII tree rendering of the filtered project structure
 */

use std::path::Path;

use crate::error::Result;
use crate::filter::FilterConfig;
use crate::types::EntryKind;
use crate::walk;

/// Renders the Project Structure section as a single string.
pub struct TreeBuilder<'a> {
    filter: &'a FilterConfig,
    skip: Option<&'a Path>,
}

impl<'a> TreeBuilder<'a> {
    /// Create a tree builder. `skip` is the output document itself.
    pub fn new(filter: &'a FilterConfig, skip: Option<&'a Path>) -> Self {
        Self { filter, skip }
    }

    /// Build the tree for `root`.
    ///
    /// The first line is the root's base name; every line is
    /// newline-terminated.
    pub fn build(&self, root: &Path) -> Result<String> {
        let root_name = root.file_name().unwrap_or_default().to_string_lossy();

        let mut output = String::new();
        output.push_str(&root_name);
        output.push('\n');
        for line in self.walk(root, "")? {
            output.push_str(&line);
            output.push('\n');
        }

        Ok(output)
    }

    // Depth-first pre-order; each call returns its own lines rather
    // than appending to a shared accumulator. Connectors are chosen on
    // the filtered sibling list, so an excluded entry that happens to
    // sort last never steals the terminal connector.
    fn walk(&self, dir: &Path, prefix: &str) -> Result<Vec<String>> {
        let children = walk::list_children(dir, self.filter, self.skip)?;

        let mut lines = Vec::new();
        for (index, entry) in children.iter().enumerate() {
            let is_last = index == children.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };
            lines.push(format!("{prefix}{connector}{}", entry.name));

            if entry.kind == EntryKind::Directory {
                let extension = if is_last { "    " } else { "│   " };
                let child_prefix = format!("{prefix}{extension}");
                lines.extend(self.walk(&entry.path, &child_prefix)?);
            }
        }

        Ok(lines)
    }
}
