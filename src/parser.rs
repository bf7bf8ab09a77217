//! Parser for `git log --numstat --pretty=medium --summary --date=local`
//! output.

use crate::error::{GitlogError, Result};
use crate::model::{CommitRecord, FileChange};
use chrono::NaiveDateTime;

/// Format `--date=local` renders dates in, e.g. `Fri Apr 24 10:15:27 2015`.
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Length of a full commit hash.
const ID_LEN: usize = 40;

/// Indentation `--pretty=medium` puts in front of message body lines.
const MESSAGE_INDENT: &str = "    ";

/// Commit record under construction. Becomes a [`CommitRecord`] once the
/// next boundary line (or end of input) finalizes it.
struct PartialRecord {
    id: String,
    author: String,
    timestamp: Option<NaiveDateTime>,
    message: String,
    changes: Vec<FileChange>,
}

impl PartialRecord {
    fn new(id: String) -> Self {
        Self {
            id,
            author: String::new(),
            timestamp: None,
            message: String::new(),
            changes: Vec::new(),
        }
    }

    fn finish(self) -> Result<CommitRecord> {
        let timestamp = self.timestamp.ok_or_else(|| {
            GitlogError::InvalidDate(format!("commit {} has no Date header", self.id))
        })?;
        Ok(CommitRecord {
            id: self.id,
            author: self.author,
            timestamp,
            message: self.message.trim_matches('\n').to_string(),
            changes: self.changes,
        })
    }
}

/// Parse raw log output into an ordered sequence of commit records.
///
/// Single forward pass. Lines matching no recognized shape (blank lines,
/// ` create mode ...` summary lines) are skipped. An unparseable `Date:`
/// value aborts the whole parse; no partial results are returned.
pub fn parse_log(text: &str) -> Result<Vec<CommitRecord>> {
    let mut records = Vec::new();
    let mut current: Option<PartialRecord> = None;

    for line in text.lines() {
        if let Some(id) = commit_boundary(line) {
            if let Some(partial) = current.take() {
                records.push(partial.finish()?);
            }
            current = Some(PartialRecord::new(id.to_string()));
            continue;
        }

        // Header and body lines before the first boundary cannot be
        // attributed to a commit; well-formed log output never produces them.
        let Some(partial) = current.as_mut() else {
            continue;
        };

        if let Some(rest) = line.strip_prefix("Author:") {
            partial.author = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Date:") {
            let raw = rest.trim();
            let parsed = NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
                .map_err(|e| GitlogError::InvalidDate(format!("{raw}: {e}")))?;
            partial.timestamp = Some(parsed);
        } else if line.starts_with(MESSAGE_INDENT) {
            partial.message.push_str(line.trim_matches(' '));
            partial.message.push('\n');
        } else {
            let fields: Vec<&str> = line.split('\t').collect();
            if let [added, removed, file] = fields[..] {
                partial.changes.push(FileChange {
                    file: file.trim().to_string(),
                    added: change_count(added.trim()),
                    removed: change_count(removed.trim()),
                });
            }
        }
    }

    if let Some(partial) = current.take() {
        records.push(partial.finish()?);
    }

    Ok(records)
}

fn commit_boundary(line: &str) -> Option<&str> {
    line.strip_prefix("commit ").filter(|id| id.len() == ID_LEN)
}

/// Numstat count field. `-` marks a binary file and counts as zero.
fn change_count(field: &str) -> u32 {
    if field == "-" {
        0
    } else {
        field.parse().unwrap_or(0)
    }
}
