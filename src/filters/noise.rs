use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CommitInfo, FilterResult};

/// Merge commits with generated messages carry no summarizable signal.
static MERGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Merge (branch|pull request|remote)").unwrap());

/// Automation identities filtered out by default. Compared against the
/// lowercased author name.
const DEFAULT_BOT_AUTHORS: &[&str] = &[
    "dependabot",
    "dependabot[bot]",
    "renovate",
    "renovate[bot]",
    "greenkeeper[bot]",
    "snyk-bot",
    "github-actions[bot]",
    "codecov[bot]",
];

/// Removes low-information commits from a window: generated merge messages,
/// known automation authors, and duplicate message first lines.
///
/// The bot denylist is configuration, not a constant: start from
/// [`NoiseFilter::default`] and extend it, or supply a replacement set with
/// [`NoiseFilter::with_bot_authors`].
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    bot_authors: HashSet<String>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::with_bot_authors(DEFAULT_BOT_AUTHORS.iter().copied())
    }
}

impl NoiseFilter {
    /// A filter with the given denylist instead of the default one.
    pub fn with_bot_authors<I, S>(authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            bot_authors: authors.into_iter().map(|a| a.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add one identity to the denylist.
    pub fn add_bot_author(&mut self, author: &str) {
        self.bot_authors.insert(author.to_lowercase());
    }

    /// Drop noisy commits, preserving the order of survivors.
    ///
    /// Input is newest-first, so keeping the first occurrence of each
    /// distinct message first line keeps the most recent one. Only kept
    /// commits mark their first line as seen; a merge or bot commit does
    /// not shadow a later human commit with the same summary.
    pub fn apply(&self, commits: Vec<CommitInfo>) -> FilterResult {
        let total = commits.len();
        let mut seen_messages: HashSet<String> = HashSet::new();
        let mut filtered = Vec::with_capacity(total);

        for commit in commits {
            let first_line = commit.summary();

            if MERGE_RE.is_match(first_line) {
                continue;
            }
            if self.bot_authors.contains(&commit.author.to_lowercase()) {
                continue;
            }
            if seen_messages.contains(first_line) {
                continue;
            }

            seen_messages.insert(first_line.to_string());
            filtered.push(commit);
        }

        let removed_count = total - filtered.len();
        FilterResult { commits: filtered, removed_count }
    }
}
