//! Digest orchestration.
//!
//! Wires the four pipeline stages together the way the summarizing agents
//! consume them: read → filter → group → render, returning the text block
//! plus the disclosure counts.

pub mod builder;

pub use builder::{Digest, DigestOptions, build_digest};
