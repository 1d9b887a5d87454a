//! Bounded commit-window reader backed by libgit2.
//!
//! # Error Handling Strategy
//!
//! - **Repository-level errors**: a path that is not a working copy maps to
//!   [`ReadError::RepositoryNotFound`]; any other backend failure
//!   (unresolvable ref, corrupted metadata, I/O) maps to [`ReadError::Vcs`]
//!   and is surfaced to the caller, who may retry.
//! - **Commit-level errors**: a commit whose changed-file list cannot be
//!   diffed keeps an empty `files_changed` instead of failing the whole
//!   read. Logged at debug level.
//! - **Timeouts**: [`read_commits_with_timeout`] converts a slow read into
//!   [`ReadError::Timeout`], which callers treat like any other read
//!   failure.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate};
use git2::{Commit, DiffOptions, ErrorCode, Repository, Sort};

use crate::error::{ReadError, Result};
use crate::models::{CommitInfo, ReadResult};

/// Default window size, matching what the summarizing agents request.
pub const DEFAULT_MAX_COMMITS: usize = 300;

/// Parameters for a single history read.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Path to (or inside) the repository working copy.
    pub repo: PathBuf,
    /// Branch or ref to walk.
    pub branch: String,
    /// Maximum number of commits to return.
    pub max_commits: usize,
    /// Only commits at or after this date (RFC 3339 or YYYY-MM-DD).
    pub since: Option<String>,
    /// Only commits at or before this date (RFC 3339 or YYYY-MM-DD).
    pub until: Option<String>,
}

impl ReadOptions {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            branch: "HEAD".to_string(),
            max_commits: DEFAULT_MAX_COMMITS,
            since: None,
            until: None,
        }
    }
}

/// Read a bounded window of commits, newest first.
///
/// Asks the walk for one commit more than `max_commits`: seeing the extra
/// one proves the history continues past the window, without a separate
/// counting query. The extra commit is discarded and `truncated` is set.
pub fn read_commits(options: &ReadOptions) -> Result<ReadResult> {
    let repo = Repository::discover(&options.repo).map_err(|e| {
        if e.code() == ErrorCode::NotFound {
            ReadError::RepositoryNotFound(options.repo.clone())
        } else {
            ReadError::Vcs(e)
        }
    })?;

    let target = repo.revparse_single(&options.branch)?.peel_to_commit()?;
    let mut revwalk = repo.revwalk()?;
    revwalk.push(target.id())?;
    revwalk.set_sorting(Sort::TIME)?;

    let since = options.since.as_deref().and_then(|raw| parse_bound(raw, false));
    let until = options.until.as_deref().and_then(|raw| parse_bound(raw, true));

    let mut commits = Vec::new();
    for oid in revwalk {
        let commit = repo.find_commit(oid?)?;
        let seconds = commit.time().seconds();

        if let Some(until) = until {
            if seconds > until {
                continue;
            }
        }
        // Walk is newest-first: everything past the lower bound is older.
        if let Some(since) = since {
            if seconds < since {
                break;
            }
        }

        commits.push(to_commit_info(&repo, &commit));
        if commits.len() > options.max_commits {
            break;
        }
    }

    let truncated = commits.len() > options.max_commits;
    if truncated {
        commits.truncate(options.max_commits);
    }

    tracing::debug!(count = commits.len(), truncated, "read commit window");
    Ok(ReadResult { commits, truncated })
}

/// Run [`read_commits`] on a worker thread, bounding how long the caller
/// blocks. Reads against very large histories can be slow; a caller that
/// cannot wait treats expiry as a failed read and may retry later.
pub fn read_commits_with_timeout(options: ReadOptions, timeout: Duration) -> Result<ReadResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(read_commits(&options));
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => Err(ReadError::Timeout(timeout)),
    }
}

fn to_commit_info(repo: &Repository, commit: &Commit) -> CommitInfo {
    let mut sha = commit.id().to_string();
    sha.truncate(8);

    let files_changed = match changed_paths(repo, commit) {
        Ok(files) => files,
        Err(e) => {
            tracing::debug!(sha = %sha, error = %e, "could not list changed files");
            Vec::new()
        }
    };

    CommitInfo {
        sha,
        message: commit.message().unwrap_or("").trim().to_string(),
        author: commit.author().name().unwrap_or("").to_string(),
        timestamp: DateTime::from_timestamp(commit.time().seconds(), 0).unwrap_or_default(),
        files_changed,
    }
}

/// Paths touched by a commit, diffed against its first parent (or the empty
/// tree for a root commit).
fn changed_paths(
    repo: &Repository,
    commit: &Commit,
) -> std::result::Result<Vec<String>, git2::Error> {
    let tree = commit.tree()?;
    let parent_tree = commit.parent(0).ok().and_then(|p| p.tree().ok());

    let mut opts = DiffOptions::new();
    let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;

    let mut paths = Vec::new();
    diff.foreach(
        &mut |delta, _progress| {
            if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                paths.push(path.to_string_lossy().into_owned());
            }
            true
        },
        None,
        None,
        None,
    )?;

    Ok(paths)
}

/// Parse a date bound as RFC 3339 or a bare `YYYY-MM-DD` (start of day for
/// lower bounds, end of day for upper bounds, UTC). The backend has no
/// native date-string filter, so a bound it could not interpret is ignored
/// rather than rejected.
fn parse_bound(raw: &str, end_of_day: bool) -> Option<i64> {
    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => {
            let time = if end_of_day {
                date.and_hms_opt(23, 59, 59)
            } else {
                date.and_hms_opt(0, 0, 0)
            };
            time.map(|t| t.and_utc().timestamp())
        }
        Err(_) => {
            tracing::debug!(bound = raw, "ignoring unparseable date bound");
            None
        }
    }
}
