/*!
 * Clipboard support for Code2Summarize
 *
 * Copies the finished summary to the system clipboard by piping it to
 * the first available platform clipboard command.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Copy text to the system clipboard using the first available
/// clipboard command for the current platform.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    for (cmd, args) in candidates() {
        if command_exists(cmd) {
            return pipe_to_command(cmd, &args, text);
        }
    }
    Err(ClipboardError::NoClipboardFound)
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Some(paths) = env::var_os("PATH") {
        for path in env::split_paths(&paths) {
            if path.join(command).exists() {
                return true;
            }
        }
    }

    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

// Candidate commands in order of preference. tmux wins inside a tmux
// session regardless of platform.
fn candidates() -> Vec<(&'static str, Vec<&'static str>)> {
    let mut list = Vec::new();

    if env::var("TMUX").is_ok() {
        list.push(("tmux", vec!["load-buffer", "-w", "-"]));
    }

    if cfg!(target_os = "macos") {
        list.push(("pbcopy", vec![]));
    } else if cfg!(target_os = "windows") || env::var("WSL_DISTRO_NAME").is_ok() {
        list.push(("clip.exe", vec![]));
    } else {
        list.push(("wl-copy", vec![]));
        list.push(("xsel", vec!["-b", "-i"]));
        list.push(("xclip", vec!["-selection", "clipboard", "-in"]));
    }

    list
}

fn pipe_to_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to spawn {}", cmd)))?;

    let stdin = child.stdin.as_mut().ok_or_else(|| {
        ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
    })?;

    stdin
        .write_all(text.as_bytes())
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to write to {}", cmd)))?;

    let status = child
        .wait()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to wait for {}", cmd)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("ls"));
        assert!(!command_exists("nonexistentcommandxyz"));
    }
}
