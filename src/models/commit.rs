use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single commit read from the repository.
///
/// Immutable once read; every downstream stage works on owned copies or
/// borrows and never mutates a commit in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Abbreviated commit hash (first 8 hex digits).
    pub sha: String,
    /// Full commit message, leading/trailing whitespace trimmed.
    pub message: String,
    /// Author name as recorded in the commit.
    pub author: String,
    pub timestamp: DateTime<Utc>,
    /// Paths touched by this commit. Empty when the backend could not
    /// produce a file list for it.
    #[serde(default)]
    pub files_changed: Vec<String>,
}

impl CommitInfo {
    /// First line of the commit message (empty string for empty messages).
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Result of reading a window of commit history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadResult {
    /// Commits in reverse-chronological order (newest first).
    pub commits: Vec<CommitInfo>,
    /// True iff the branch has more matching commits than were requested.
    pub truncated: bool,
}

/// Result of noise-filtering a commit window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterResult {
    /// Surviving commits, in their original order.
    pub commits: Vec<CommitInfo>,
    /// Number of commits removed by the filter rules combined.
    pub removed_count: usize,
}
