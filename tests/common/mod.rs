//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use git2::{Repository, Signature, Time};
use tempfile::TempDir;

/// Builder for real temporary git repositories with controlled authors,
/// messages, and commit timestamps.
pub struct RepoBuilder {
    temp_dir: TempDir,
    repo: Repository,
}

impl RepoBuilder {
    /// Initialize an empty repository in a fresh temp directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Repository::init(temp_dir.path()).expect("Failed to init repo");
        Self { temp_dir, repo }
    }

    /// Path to the repository working copy.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a commit on HEAD with the given author, timestamp (epoch
    /// seconds), and file contents. Files are written into the working copy
    /// and staged, so the commit's diff lists exactly these paths.
    pub fn commit(&self, message: &str, author: &str, timestamp: i64, files: &[(&str, &str)]) {
        for (path, contents) in files {
            let full = self.temp_dir.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).expect("Failed to create file parent dir");
            }
            fs::write(full, contents).expect("Failed to write file");
        }

        let mut index = self.repo.index().expect("Failed to open index");
        for (path, _) in files {
            index.add_path(Path::new(path)).expect("Failed to stage file");
        }
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let signature = Signature::new(author, "test@example.com", &Time::new(timestamp, 0))
            .expect("Failed to create signature");
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .expect("Failed to commit");
    }

    /// Keep the temp directory alive for the test's duration.
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for RepoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Epoch seconds for noon UTC on a day in June 2024.
pub fn june_noon(day: u32) -> i64 {
    Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap().timestamp()
}

/// A repository with activity a summarizer would typically see: two humans,
/// a dependency bot, a generated merge, and a duplicated message, all
/// within a few days.
pub fn realistic_repo() -> RepoBuilder {
    let repo = RepoBuilder::new();
    repo.commit("init project", "alice", june_noon(10), &[("README.md", "readme")]);
    repo.commit(
        "add parser",
        "alice",
        june_noon(11),
        &[("src/parser.rs", "parser"), ("src/lib.rs", "lib")],
    );
    repo.commit("Bump serde from 1.0.1 to 1.0.2", "dependabot[bot]", june_noon(11) + 60, &[(
        "Cargo.toml",
        "deps",
    )]);
    repo.commit("fix parser panic", "bob", june_noon(12), &[("src/parser.rs", "parser v2")]);
    repo.commit("Merge branch 'feature/parser'", "bob", june_noon(12) + 60, &[]);
    repo.commit("fix parser panic", "bob", june_noon(13), &[("src/parser.rs", "parser v3")]);
    repo
}
