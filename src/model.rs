use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One per-file statistics line within a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub file: String,
    pub added: u32,
    pub removed: u32,
}

/// One parsed history entry.
///
/// `changes` preserves the order in which the stat lines appeared in the
/// log output. The timestamp carries no offset because `--date=local`
/// renders none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub id: String,
    pub author: String,
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub changes: Vec<FileChange>,
}

impl CommitRecord {
    pub fn total_added(&self) -> u64 {
        self.changes.iter().map(|c| c.added as u64).sum()
    }

    pub fn total_removed(&self) -> u64 {
        self.changes.iter().map(|c| c.removed as u64).sum()
    }

    pub fn files_touched(&self) -> usize {
        self.changes.len()
    }
}
