use std::collections::HashMap;

use crate::models::CommitGroup;

/// Area summaries list at most this many top-level path segments.
const MAX_AREAS: usize = 6;

/// Commit message first lines are previewed up to this many characters.
const MESSAGE_PREVIEW_CHARS: usize = 120;

/// Serialize grouped commits into a compact text block for a prompt.
///
/// Deterministic: identical group sequences produce byte-identical output.
/// No size capping happens here; bounding the prompt is the calling agent's
/// job.
pub fn render_groups(groups: &[CommitGroup]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for group in groups {
        // Groups are non-empty by construction; skip any that are not.
        let Some((start, end)) = group.date_range() else {
            continue;
        };

        let date_str = if start.date_naive() == end.date_naive() {
            start.format("%Y-%m-%d").to_string()
        } else {
            format!("{} → {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
        };

        lines.push(format!(
            "\n## {} ({}) — {} commit(s)",
            group.label,
            date_str,
            group.commits.len()
        ));
        lines.push(format!("Authors: {}", group.authors().join(", ")));

        let areas = summarize_areas(&group.touched_files());
        if !areas.is_empty() {
            lines.push(format!("Areas touched: {}", areas.join(", ")));
        }

        lines.push("Commits:".to_string());
        for commit in &group.commits {
            let preview: String = commit.summary().chars().take(MESSAGE_PREVIEW_CHARS).collect();
            lines.push(format!("  [{}] {}", commit.sha, preview));
        }
    }

    lines.join("\n")
}

/// Collapse file paths to their leading path segment and count frequency,
/// most-touched first (ties keep first-seen order).
fn summarize_areas(files: &[&str]) -> Vec<String> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut areas: Vec<(String, usize)> = Vec::new();

    for file in files {
        let segment = match file.split_once('/') {
            Some((top, _)) => top,
            None => *file,
        };
        match slots.get(segment) {
            Some(&slot) => areas[slot].1 += 1,
            None => {
                slots.insert(segment.to_string(), areas.len());
                areas.push((segment.to_string(), 1));
            }
        }
    }

    areas.sort_by(|a, b| b.1.cmp(&a.1));
    areas.into_iter().take(MAX_AREAS).map(|(segment, n)| format!("{} ({})", segment, n)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::models::CommitInfo;

    use super::*;

    fn commit(sha: &str, message: &str, author: &str, day: u32, files: &[&str]) -> CommitInfo {
        CommitInfo {
            sha: sha.to_string(),
            message: message.to_string(),
            author: author.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap(),
            files_changed: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_single_day_group() {
        let groups = vec![CommitGroup {
            label: "Author: alice".to_string(),
            commits: vec![commit("abcd1234", "fix parser", "alice", 15, &["src/parser.rs"])],
        }];

        let text = render_groups(&groups);
        assert!(text.contains("## Author: alice (2024-06-15) — 1 commit(s)"));
        assert!(text.contains("Authors: alice"));
        assert!(text.contains("Areas touched: src (1)"));
        assert!(text.contains("  [abcd1234] fix parser"));
    }

    #[test]
    fn test_render_date_range_spans_days() {
        let groups = vec![CommitGroup {
            label: "Author: alice".to_string(),
            commits: vec![
                commit("a", "newer", "alice", 15, &[]),
                commit("b", "older", "alice", 12, &[]),
            ],
        }];

        let text = render_groups(&groups);
        assert!(text.contains("(2024-06-12 → 2024-06-15)"));
    }

    #[test]
    fn test_area_summary_counts_top_level_segments() {
        let groups = vec![CommitGroup {
            label: "test".to_string(),
            commits: vec![commit(
                "a",
                "change things",
                "alice",
                15,
                &["src/a.py", "src/b.py", "docs/readme.md"],
            )],
        }];

        let text = render_groups(&groups);
        assert!(text.contains("Areas touched: src (2), docs (1)"));
    }

    #[test]
    fn test_area_summary_caps_at_six_entries() {
        let files =
            vec!["a/x", "a/y", "b/x", "c/x", "d/x", "e/x", "f/x", "g/x"];
        let areas = summarize_areas(&files);
        assert_eq!(areas.len(), 6);
        assert_eq!(areas[0], "a (2)");
    }

    #[test]
    fn test_area_summary_bare_filename_counts_as_its_own_area() {
        let areas = summarize_areas(&["README.md", "src/lib.rs"]);
        assert_eq!(areas, vec!["README.md (1)", "src (1)"]);
    }

    #[test]
    fn test_no_areas_line_without_files() {
        let groups = vec![CommitGroup {
            label: "test".to_string(),
            commits: vec![commit("a", "fix bug", "alice", 15, &[])],
        }];

        let text = render_groups(&groups);
        assert!(!text.contains("Areas touched"));
    }

    #[test]
    fn test_long_first_line_truncated_to_120_chars() {
        let long = "x".repeat(200);
        let groups = vec![CommitGroup {
            label: "test".to_string(),
            commits: vec![commit("a", &long, "alice", 15, &[])],
        }];

        let text = render_groups(&groups);
        assert!(text.contains(&format!("  [a] {}", "x".repeat(120))));
        assert!(!text.contains(&"x".repeat(121)));
    }

    #[test]
    fn test_render_is_deterministic() {
        let groups = vec![CommitGroup {
            label: "Author: alice".to_string(),
            commits: vec![
                commit("a", "fix parser", "alice", 15, &["src/a.rs", "docs/x.md"]),
                commit("b", "add tests", "bob", 14, &["tests/y.rs"]),
            ],
        }];

        assert_eq!(render_groups(&groups), render_groups(&groups));
    }

    #[test]
    fn test_render_empty_groups() {
        assert_eq!(render_groups(&[]), "");
    }
}
