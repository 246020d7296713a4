//! Integration tests for taskrank CLI
//!
//! These tests run the binary against a realistic backlog written to a
//! temporary directory, in both file formats, and check that the library
//! and the CLI agree.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use chrono::{TimeZone, Utc};
use taskrank::clock::FixedClock;
use taskrank::loader::load_tasks;
use taskrank::scoring::TaskScorer;
use tempfile::TempDir;

const NOW: &str = "2024-03-04T09:30:00Z";

/// Helper function to create a taskrank command
fn taskrank() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("taskrank"));
    cmd.env_remove("TASKRANK_CONFIG");
    cmd
}

/// Write a backlog of `n` tasks cycling through every rule
fn write_backlog(dir: &Path, n: usize) -> std::path::PathBuf {
    let priorities = ["low", "medium", "high", "urgent", "someday"];
    let statuses = ["active", "review", "done", "blocked"];
    let dues = [None, Some("2024-03-01"), Some("2024-03-04T18:00:00Z"), Some("2024-03-06"), Some("2024-03-10")];
    let tags = [r#"[]"#, r#"["urgent"]"#, r#"["frontend", "blocker"]"#, r#"["Critical"]"#];
    let updated = ["2024-03-04T09:00:00Z", "2024-02-01T00:00:00Z", "2024-03-03T10:00:00Z"];

    let mut content = String::new();
    for i in 0..n {
        content.push_str("[[task]]\n");
        content.push_str(&format!("id = \"T{i}\"\n"));
        content.push_str(&format!("title = \"Task {i}\"\n"));
        content.push_str(&format!("priority = \"{}\"\n", priorities[i % priorities.len()]));
        content.push_str(&format!("status = \"{}\"\n", statuses[i % statuses.len()]));
        content.push_str(&format!("tags = {}\n", tags[i % tags.len()]));
        if let Some(due) = dues[i % dues.len()] {
            content.push_str(&format!("due_date = \"{due}\"\n"));
        }
        content.push_str(&format!("updated_at = \"{}\"\n\n", updated[i % updated.len()]));
    }

    let path = dir.join("backlog.toml");
    fs::write(&path, content).unwrap();
    path
}

fn cli_ranking(args: &[&str]) -> Vec<(String, i64)> {
    let output = taskrank().args(args).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| (t["id"].as_str().unwrap().to_string(), t["score"].as_i64().unwrap()))
        .collect()
}

#[test]
fn test_cli_ranking_matches_library() {
    let temp = TempDir::new().unwrap();
    let path = write_backlog(temp.path(), 40);

    let tasks = load_tasks(&path).unwrap();
    let scorer = TaskScorer::with_clock(FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap()));
    let expected: Vec<(String, i64)> = scorer
        .rank_with_scores(&tasks)
        .into_iter()
        .map(|(t, s)| (t.id.clone().unwrap(), s))
        .collect();

    let actual = cli_ranking(&["--json", "--now", NOW, "rank", path.to_str().unwrap()]);
    assert_eq!(actual, expected);

    let top = cli_ranking(&["--json", "--now", NOW, "top", path.to_str().unwrap()]);
    assert_eq!(top, expected[..5].to_vec());
}

#[test]
fn test_json_and_toml_backlogs_rank_identically() {
    let temp = TempDir::new().unwrap();
    let toml_path = write_backlog(temp.path(), 12);

    let records: Vec<taskrank::TaskRecord> = load_tasks(&toml_path)
        .unwrap()
        .iter()
        .map(taskrank::TaskRecord::from)
        .collect();
    let json_path = temp.path().join("backlog.json");
    fs::write(&json_path, serde_json::to_string(&serde_json::json!({ "tasks": records })).unwrap()).unwrap();

    let from_toml = cli_ranking(&["--json", "--now", NOW, "rank", toml_path.to_str().unwrap()]);
    let from_json = cli_ranking(&["--json", "--now", NOW, "rank", json_path.to_str().unwrap()]);
    assert_eq!(from_toml, from_json);
}

#[test]
fn test_ranking_is_stable_across_runs() {
    let temp = TempDir::new().unwrap();
    let path = write_backlog(temp.path(), 25);

    let first = cli_ranking(&["--json", "--now", NOW, "rank", path.to_str().unwrap()]);
    let second = cli_ranking(&["--json", "--now", NOW, "rank", path.to_str().unwrap()]);
    assert_eq!(first, second);

    // Equal scores appear in file order
    for pair in first.windows(2) {
        if pair[0].1 == pair[1].1 {
            let a: usize = pair[0].0[1..].parse().unwrap();
            let b: usize = pair[1].0[1..].parse().unwrap();
            assert!(a < b, "{} and {} tie but are out of file order", pair[0].0, pair[1].0);
        }
    }
}
