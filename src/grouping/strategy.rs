use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{CommitGroup, CommitInfo};

/// Cap on explicit groups; keeps the rendered digest bounded no matter how
/// long the history is.
pub const DEFAULT_MAX_GROUPS: usize = 10;

/// Label of the synthetic bucket absorbing groups beyond the cap.
pub const OVERFLOW_LABEL: &str = "Older activity";

/// Histories spanning more than this many whole days group chronologically.
const DAY_SPAN_THRESHOLD: i64 = 7;

/// How a commit window is partitioned into groups.
///
/// A short window dominated by one actor reads better by contributor, while
/// a long window reads better chronologically. Selection hangs on a single
/// threshold predicate so further strategies can be added as variants
/// without touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingStrategy {
    /// One group per UTC calendar day, most recent day first.
    ByDay,
    /// One group per author, largest group first.
    ByAuthor,
}

impl GroupingStrategy {
    /// Pick a strategy from the time span the commits cover.
    pub fn select(commits: &[CommitInfo]) -> Self {
        if span_days(commits) > DAY_SPAN_THRESHOLD {
            GroupingStrategy::ByDay
        } else {
            GroupingStrategy::ByAuthor
        }
    }

    /// Partition the commits according to this strategy.
    pub fn apply(&self, commits: &[CommitInfo]) -> Vec<CommitGroup> {
        match self {
            GroupingStrategy::ByDay => group_by_day(commits),
            GroupingStrategy::ByAuthor => group_by_author(commits),
        }
    }
}

/// Partition a filtered commit window into a bounded sequence of labeled
/// groups.
///
/// Every input commit lands in exactly one group. If the natural grouping
/// yields more than `max_groups` groups, the first `max_groups` are kept
/// unchanged and the rest are merged, in order, into one trailing
/// "Older activity" bucket (`max_groups + 1` groups total).
pub fn group_commits(commits: &[CommitInfo], max_groups: usize) -> Vec<CommitGroup> {
    if commits.is_empty() {
        return Vec::new();
    }

    let strategy = GroupingStrategy::select(commits);
    tracing::debug!(?strategy, count = commits.len(), "grouping commit window");
    cap_groups(strategy.apply(commits), max_groups)
}

/// Whole days between the earliest and latest commit.
fn span_days(commits: &[CommitInfo]) -> i64 {
    let Some(min) = commits.iter().map(|c| c.timestamp).min() else {
        return 0;
    };
    let Some(max) = commits.iter().map(|c| c.timestamp).max() else {
        return 0;
    };
    (max - min).num_days()
}

fn group_by_day(commits: &[CommitInfo]) -> Vec<CommitGroup> {
    let mut slots: HashMap<NaiveDate, usize> = HashMap::new();
    let mut groups: Vec<(NaiveDate, CommitGroup)> = Vec::new();

    for commit in commits {
        let day = commit.timestamp.date_naive();
        let slot = *slots.entry(day).or_insert_with(|| {
            let label = commit.timestamp.format("%A, %B %d %Y").to_string();
            groups.push((day, CommitGroup::new(label)));
            groups.len() - 1
        });
        groups[slot].1.commits.push(commit.clone());
    }

    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups.into_iter().map(|(_, group)| group).collect()
}

fn group_by_author(commits: &[CommitInfo]) -> Vec<CommitGroup> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<CommitGroup> = Vec::new();

    for commit in commits {
        let slot = *slots.entry(commit.author.clone()).or_insert_with(|| {
            groups.push(CommitGroup::new(format!("Author: {}", commit.author)));
            groups.len() - 1
        });
        groups[slot].commits.push(commit.clone());
    }

    // Stable sort: equal-sized groups keep first-seen order.
    groups.sort_by(|a, b| b.commits.len().cmp(&a.commits.len()));
    groups
}

fn cap_groups(mut groups: Vec<CommitGroup>, max_groups: usize) -> Vec<CommitGroup> {
    if groups.len() <= max_groups {
        return groups;
    }

    let overflow = groups.split_off(max_groups);
    let mut bucket = CommitGroup::new(OVERFLOW_LABEL);
    for group in overflow {
        bucket.commits.extend(group.commits);
    }
    groups.push(bucket);
    groups
}
