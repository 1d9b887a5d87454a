use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CommitInfo;

/// A labeled cluster of commits sharing a grouping key (calendar day or
/// author).
///
/// Authors, date range, and touched files are derived on demand rather than
/// stored, so a group can never fall out of sync with its commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitGroup {
    pub label: String,
    pub commits: Vec<CommitInfo>,
}

impl CommitGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), commits: Vec::new() }
    }

    /// Unique author names in first-seen order over the group's commits.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut authors = Vec::new();
        for commit in &self.commits {
            if seen.insert(commit.author.as_str()) {
                authors.push(commit.author.as_str());
            }
        }
        authors
    }

    /// Earliest and latest commit timestamps, or None for an empty group.
    pub fn date_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let min = self.commits.iter().map(|c| c.timestamp).min()?;
        let max = self.commits.iter().map(|c| c.timestamp).max()?;
        Some((min, max))
    }

    /// Unique changed file paths in first-seen order across commits.
    pub fn touched_files(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();
        for commit in &self.commits {
            for file in &commit.files_changed {
                if seen.insert(file.as_str()) {
                    files.push(file.as_str());
                }
            }
        }
        files
    }
}
