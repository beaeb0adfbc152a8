use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"[
    {"name": "A", "full_name": "o/A", "stars": 20000, "size": 50, "language": "Go",
     "archived": false, "url": "https://github.com/o/A", "clone_url": "https://github.com/o/A.git",
     "updated_at": "2024-01-01T00:00:00Z", "topics": ["cli"]},
    {"name": "B", "full_name": "o/B", "stars": 50, "size": 200, "language": "Rust",
     "archived": true, "url": "https://github.com/o/B"},
    {"name": "C", "full_name": "o/C", "stars": 3000, "size": 9000, "language": "Rust",
     "archived": false, "url": "https://github.com/o/C"},
    {"name": "D", "full_name": "o/D", "stars": 10, "size": 80000, "language": null,
     "archived": false}
]"#;

/// A starpick command isolated from the user's config and environment.
fn starpick(workdir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("starpick");
    cmd.current_dir(workdir)
        .env("XDG_CONFIG_HOME", workdir.join("config"))
        .env_remove("RUST_LOG")
        .env_remove("STARPICK_SNAPSHOT__PATH")
        .env_remove("STARPICK_PICK__COUNT")
        .env_remove("STARPICK_PICK__INCLUDE_ARCHIVED")
        .env_remove("STARPICK_UI__COLOR")
        .env_remove("STARPICK_BROWSER__COMMAND");
    cmd
}

fn workdir_with_snapshot() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("starred_repos.json"), SNAPSHOT).unwrap();
    dir
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--output").arg("json").output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    starpick(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("starpick"));
}

#[test]
fn test_help_lists_pick_options() {
    let dir = tempfile::tempdir().unwrap();
    starpick(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--language"))
        .stdout(predicate::str::contains("--difficulty"))
        .stdout(predicate::str::contains("--include-archived"))
        .stdout(predicate::str::contains("--open"))
        .stdout(predicate::str::contains("--count"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_missing_snapshot_exits_successfully() {
    let dir = tempfile::tempdir().unwrap();
    starpick(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("starred_repos.json not found"));
}

#[test]
fn test_missing_snapshot_json_status() {
    let dir = tempfile::tempdir().unwrap();
    let json = json_output(&mut starpick(dir.path()));

    assert_eq!(json["status"], "missing_snapshot");
}

#[test]
fn test_language_filter_picks_go_repo() {
    let dir = workdir_with_snapshot();
    starpick(dir.path())
        .args(["--language", "go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 repositories matching your criteria."))
        .stdout(predicate::str::contains("A (o/A)"))
        .stdout(predicate::str::contains("Difficulty: Beginner"))
        .stdout(predicate::str::contains("Happy learning with A!"));
}

#[test]
fn test_no_match_exits_successfully() {
    let dir = workdir_with_snapshot();
    starpick(dir.path())
        .args(["--language", "cobol"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No repositories found matching your criteria.",
        ));
}

#[test]
fn test_archived_excluded_unless_included() {
    let dir = workdir_with_snapshot();

    let json = json_output(starpick(dir.path()).args(["--count", "10"]));
    let names: Vec<&str> = json["picks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(json["matched"], 3);
    assert!(!names.contains(&"B"));

    let json = json_output(starpick(dir.path()).args(["--count", "10", "--include-archived"]));
    assert_eq!(json["matched"], 4);
    assert_eq!(json["picks"].as_array().unwrap().len(), 4);
}

#[test]
fn test_count_larger_than_matches_returns_each_match_once() {
    let dir = workdir_with_snapshot();
    let json = json_output(starpick(dir.path()).args(["--language", "rust", "--count", "5"]));

    let picks = json["picks"].as_array().unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0]["name"], "C");
    assert_eq!(picks[0]["difficulty"], "intermediate");
}

#[test]
fn test_difficulty_filter_is_case_insensitive() {
    let dir = workdir_with_snapshot();
    let json = json_output(starpick(dir.path()).args(["-d", "ADVANCED"]));

    assert_eq!(json["status"], "picked");
    assert_eq!(json["picks"][0]["name"], "D");
}

#[test]
fn test_same_seed_same_picks() {
    let dir = workdir_with_snapshot();
    let first = json_output(starpick(dir.path()).args(["--seed", "99", "--count", "2"]));
    let second = json_output(starpick(dir.path()).args(["--seed", "99", "--count", "2"]));

    assert_eq!(first["picks"], second["picks"]);
}

#[test]
fn test_zero_count_rejected() {
    let dir = workdir_with_snapshot();
    starpick(dir.path())
        .args(["--count", "0"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_difficulty_rejected() {
    let dir = workdir_with_snapshot();
    starpick(dir.path())
        .args(["--difficulty", "expert"])
        .assert()
        .failure();
}

#[test]
fn test_malformed_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), "[{\"name\": ").unwrap();

    starpick(dir.path())
        .args(["--file", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed snapshot"));
}

#[test]
fn test_snapshot_path_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("elsewhere.json"), SNAPSHOT).unwrap();
    let config_dir = dir.path().join("config").join("starpick");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[snapshot]\npath = \"elsewhere.json\"\n",
    )
    .unwrap();

    let json = json_output(&mut starpick(dir.path()));

    assert_eq!(json["status"], "picked");
}

#[test]
fn test_snapshot_path_from_env() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("elsewhere.json"), SNAPSHOT).unwrap();

    let json = json_output(starpick(dir.path()).env("STARPICK_SNAPSHOT__PATH", "elsewhere.json"));

    assert_eq!(json["status"], "picked");
    assert_eq!(json["matched"], 3);
}

#[test]
fn test_pick_settings_from_env() {
    let dir = workdir_with_snapshot();
    let json = json_output(
        starpick(dir.path())
            .env("STARPICK_PICK__COUNT", "10")
            .env("STARPICK_PICK__INCLUDE_ARCHIVED", "true"),
    );

    assert_eq!(json["matched"], 4);
    assert_eq!(json["picks"].as_array().unwrap().len(), 4);
}

#[test]
fn test_yaml_output() {
    let dir = workdir_with_snapshot();
    starpick(dir.path())
        .args(["--language", "go", "--output", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: picked"));
}

#[test]
fn test_markdown_output() {
    let dir = workdir_with_snapshot();
    starpick(dir.path())
        .args(["--language", "go", "--output", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## [o/A](https://github.com/o/A)"));
}

#[test]
fn test_completion_bash() {
    let dir = tempfile::tempdir().unwrap();
    starpick(dir.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("starpick"));
}
