use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

/// Command with the user config directory confined to `home`
fn codeharvest(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("codeharvest").unwrap();
    cmd.env_remove("CODEHARVEST_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

#[test]
fn test_extracts_and_summarizes() {
    let work = tempfile::tempdir().unwrap();
    let input = work.path().join("chat.md");
    let out = work.path().join("out");
    fs::write(
        &input,
        "# Login Service Notes\n\n```python\nimport os\nprint(os.sep)\n```\n",
    )
    .unwrap();

    codeharvest(work.path())
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("-> Login_Service_Notes (1 code blocks)"))
        .stdout(predicate::str::contains("python, 2 lines"))
        .stdout(predicate::str::contains("Files processed: 1"))
        .stdout(predicate::str::contains("Languages detected: python"));

    let topic_dir = out.join("Login_Service_Notes");
    assert!(topic_dir.join("metadata.json").exists());
    let saved: Vec<_> = fs::read_dir(&topic_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("code_01_python_") && name.ends_with(".py"))
        .collect();
    assert_eq!(saved.len(), 1);
}

#[test]
fn test_missing_and_empty_files_still_summarize() {
    let work = tempfile::tempdir().unwrap();
    let empty = work.path().join("empty.md");
    fs::write(&empty, "").unwrap();

    codeharvest(work.path())
        .arg(work.path().join("missing.md"))
        .arg(&empty)
        .arg("-o")
        .arg(work.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: File not found:"))
        .stdout(predicate::str::contains("No code blocks found"))
        .stdout(predicate::str::contains("Files processed: 1"))
        .stdout(predicate::str::contains("Code blocks found: 0"))
        .stdout(predicate::str::contains("Topics created: 0"));
}

#[test]
fn test_json_report() {
    let work = tempfile::tempdir().unwrap();
    let input = work.path().join("notes.md");
    fs::write(&input, "```bash\necho \"hello from the shell\"\n```\n").unwrap();

    let output = codeharvest(work.path())
        .arg(&input)
        .arg("--format")
        .arg("json")
        .arg("-o")
        .arg(work.path().join("out"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["documents"][0]["status"], "extracted");
    assert_eq!(report["documents"][0]["topic"], "notes");
    assert_eq!(report["summary"]["code_blocks_found"], 1);
}

#[test]
fn test_bad_config_fails() {
    let work = tempfile::tempdir().unwrap();
    let input = work.path().join("notes.md");
    fs::write(&input, "nothing here").unwrap();

    codeharvest(work.path())
        .arg(&input)
        .arg("--config")
        .arg(work.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

// dirs only honours XDG_CONFIG_HOME on Linux
#[cfg(target_os = "linux")]
#[test]
fn test_user_config_is_read() {
    let work = tempfile::tempdir().unwrap();
    let config_dir = work.path().join(".config").join("codeharvest");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[thresholds]\nfenced_min_chars = 100\n",
    )
    .unwrap();

    let input = work.path().join("notes.md");
    fs::write(&input, "```bash\necho \"hello from the shell\"\n```\n").unwrap();

    codeharvest(work.path())
        .arg(&input)
        .arg("-o")
        .arg(work.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No code blocks found"))
        .stdout(predicate::str::contains("Code blocks found: 0"));
}
