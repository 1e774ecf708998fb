use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const EVENT_ONLY_CONFIG: &str = r#"
[event]
original_date = "2004-05-01"
names = "Annelies and Jim"
did_this = "were married"
"#;

fn anniversary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("anniversary").unwrap();
    cmd.env_remove("ANNIVERSARY_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> Result<String> {
    let path = dir.path().join("anniversary.toml");
    std::fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

#[test]
fn test_no_flags_prints_usage() {
    anniversary_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--print"))
        .stdout(predicate::str::contains("--email"));
}

#[test]
fn test_print_with_fixed_today() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(&temp_dir, EVENT_ONLY_CONFIG)?;

    anniversary_cmd()
        .args(["--print", "--config", &config_path, "--today", "2024-12-31"])
        .assert()
        .success()
        .stdout(
            "Annelies and Jim were married on Saturday, May 01, 2004.\r\n\
             Today is Tuesday, December 31, 2024.\r\n\
             It has been 7549 days since the wedding.\r\n\
             On Saturday, January 04, 2025, it will have been 1079 weeks since the wedding.\r\n\
             On Wednesday, January 01, 2025, it will have been 248 months since the wedding.\n",
        );

    Ok(())
}

#[test]
fn test_config_path_from_env() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(&temp_dir, EVENT_ONLY_CONFIG)?;

    anniversary_cmd()
        .env("ANNIVERSARY_CONFIG", &config_path)
        .args(["-p", "--today", "2004-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("It has been 0 days since the wedding."));

    Ok(())
}

#[test]
fn test_missing_config_file_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = Path::new(temp_dir.path()).join("nope.toml");

    anniversary_cmd()
        .args(["--print", "--config", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("configuration file"));

    Ok(())
}

#[test]
fn test_invalid_wedding_date_exits_with_config_code() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        &EVENT_ONLY_CONFIG.replace("2004-05-01", "2004-13-01"),
    )?;

    anniversary_cmd()
        .args(["--print", "--config", &config_path])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("event.original_date"));

    Ok(())
}

#[test]
fn test_email_without_smtp_section_fails_before_printing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(&temp_dir, EVENT_ONLY_CONFIG)?;

    anniversary_cmd()
        .args(["--print", "--email", "--config", &config_path, "--today", "2024-12-31"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing configuration: email"));

    Ok(())
}

#[test]
fn test_today_before_wedding_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(&temp_dir, EVENT_ONLY_CONFIG)?;

    anniversary_cmd()
        .args(["--print", "--config", &config_path, "--today", "2004-04-30"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Wedding date is after today"));

    Ok(())
}
