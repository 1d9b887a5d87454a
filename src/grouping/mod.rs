//! Adaptive grouping of filtered commit windows.
//!
//! Partitions a window into an ordered, size-bounded sequence of labeled
//! groups. The strategy (by calendar day vs. by author) is chosen from the
//! time span the window covers; groups beyond the cap are folded into a
//! single "Older activity" bucket.

pub mod strategy;

pub use strategy::{DEFAULT_MAX_GROUPS, GroupingStrategy, OVERFLOW_LABEL, group_commits};
