//! Deterministic text rendering of grouped commits.
//!
//! The output is the digest handed to a language-model prompt: one block
//! per group with label, date range, commit count, authors, a top-level
//! "areas touched" summary, and one line per commit.

pub mod groups;

pub use groups::render_groups;
