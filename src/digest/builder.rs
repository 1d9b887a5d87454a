use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filters::NoiseFilter;
use crate::git::{self, ReadOptions};
use crate::grouping::{self, DEFAULT_MAX_GROUPS};
use crate::render::render_groups;

/// Parameters for one digest build.
#[derive(Debug, Clone)]
pub struct DigestOptions {
    pub read: ReadOptions,
    /// Cap on explicit groups before the overflow bucket kicks in.
    pub max_groups: usize,
    pub filter: NoiseFilter,
    /// Bound on how long the history read may block. None reads without a
    /// deadline.
    pub timeout: Option<Duration>,
}

impl DigestOptions {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            read: ReadOptions::new(repo),
            max_groups: DEFAULT_MAX_GROUPS,
            filter: NoiseFilter::default(),
            timeout: None,
        }
    }
}

/// A rendered history digest plus the disclosure values callers surface to
/// users ("history truncated", "N noisy commits filtered").
///
/// Serializable so one agent's digest can be handed to another as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digest {
    /// The prompt-ready text block.
    pub text: String,
    /// True iff the history had more matching commits than the window cap.
    pub truncated: bool,
    /// Commits removed by the noise filter.
    pub removed_count: usize,
    /// Commits that survived filtering and appear in the digest.
    pub commit_count: usize,
    /// Groups in the digest, including any overflow bucket.
    pub group_count: usize,
}

/// Run the full pipeline: read a bounded commit window, drop noise, group
/// adaptively, render.
///
/// Only the read can fail. An empty window (new repository, everything
/// filtered, bounds excluding all commits) produces an empty digest text,
/// which callers interpret as "nothing to report" rather than an error.
pub fn build_digest(options: &DigestOptions) -> Result<Digest> {
    let read = match options.timeout {
        Some(timeout) => git::read_commits_with_timeout(options.read.clone(), timeout)?,
        None => git::read_commits(&options.read)?,
    };
    let truncated = read.truncated;

    let filtered = options.filter.apply(read.commits);
    let groups = grouping::group_commits(&filtered.commits, options.max_groups);
    let text = render_groups(&groups);

    tracing::debug!(
        commits = filtered.commits.len(),
        removed = filtered.removed_count,
        groups = groups.len(),
        truncated,
        "built digest"
    );

    Ok(Digest {
        text,
        truncated,
        removed_count: filtered.removed_count,
        commit_count: filtered.commits.len(),
        group_count: groups.len(),
    })
}
