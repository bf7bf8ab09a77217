//! History text source: runs the `git` binary against a repository.

use crate::error::{GitlogError, Result};
use crate::model::CommitRecord;
use crate::parser::parse_log;
use std::path::Path;
use std::process::Command;

/// The parser depends on exactly this formatting; other options change the
/// line shapes it classifies.
pub const LOG_ARGS: [&str; 5] = [
    "log",
    "--numstat",
    "--pretty=medium",
    "--summary",
    "--date=local",
];

/// Raw history text for the repository at `dir`.
pub fn log_output(dir: &Path) -> Result<String> {
    let output = Command::new("git").current_dir(dir).args(LOG_ARGS).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitlogError::Git(stderr.trim().to_string()));
    }

    Ok(String::from_utf8(output.stdout)?)
}

/// Parsed history for the repository at `dir`.
pub fn log(dir: &Path) -> Result<Vec<CommitRecord>> {
    parse_log(&log_output(dir)?)
}
