//! Commit Digest - deterministic commit-history digests for summarizing agents
//!
//! This library reads a bounded window of commits from a local git
//! repository and turns it into a compact, reproducible text block sized
//! for a language-model prompt. The pipeline is four strictly sequential
//! stages:
//!
//! 1. Read a newest-first commit window, detecting whether history was
//!    truncated ([`git::read_commits`])
//! 2. Drop noise: generated merges, automation authors, duplicate messages
//!    ([`NoiseFilter`])
//! 3. Partition into labeled groups, by calendar day for long spans and by
//!    author for short ones, capped with an overflow bucket
//!    ([`group_commits`])
//! 4. Render the groups deterministically ([`render_groups`])
//!
//! Only stage 1 performs I/O or can fail; the rest are pure functions that
//! degrade to empty output on empty input.
//!
//! # Example
//!
//! ```no_run
//! use commit_digest::{DigestOptions, build_digest};
//!
//! let digest = build_digest(&DigestOptions::new("/path/to/repo"))?;
//! if digest.truncated {
//!     eprintln!("history truncated");
//! }
//! println!("{}", digest.text);
//! # Ok::<(), commit_digest::ReadError>(())
//! ```

pub mod cli;
pub mod digest;
pub mod error;
pub mod filters;
pub mod git;
pub mod grouping;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use digest::{Digest, DigestOptions, build_digest};
pub use error::ReadError;
pub use filters::NoiseFilter;
pub use git::{ReadOptions, read_commits, read_commits_with_timeout};
pub use grouping::{GroupingStrategy, group_commits};
pub use models::{CommitGroup, CommitInfo, FilterResult, ReadResult};
pub use render::render_groups;
