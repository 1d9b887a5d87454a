//! Git history access.
//!
//! The only stage of the pipeline that performs I/O: one blocking read
//! against the repository per invocation. Everything downstream is a pure
//! function over the returned window.

pub mod reader;

pub use reader::{DEFAULT_MAX_COMMITS, ReadOptions, read_commits, read_commits_with_timeout};
