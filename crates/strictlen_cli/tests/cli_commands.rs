//! Integration tests for CLI commands
//!
//! Tests for init, config loading, output formats and option overrides.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a command for the strictlen CLI
fn strictlen_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_strictlen"))
}

/// Helper to get fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn long_lines_fixture() -> PathBuf {
    fixtures_dir().join("long_lines.md")
}

mod init_command {
    use super::*;

    #[test]
    fn creates_new_config_file() {
        let temp_dir = TempDir::new().unwrap();

        strictlen_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .success()
            .stderr(predicate::str::contains("Created .strictlen.jsonc"));

        let config_path = temp_dir.path().join(".strictlen.jsonc");
        assert!(config_path.exists());

        let content = fs::read_to_string(config_path).unwrap();
        assert!(content.contains("stricter-line-length"));
        assert!(content.contains("line_length"));
    }

    #[test]
    fn fails_when_config_exists_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".strictlen.jsonc");

        fs::write(&config_path, "{}").unwrap();

        strictlen_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn overwrites_config_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".strictlen.jsonc");

        fs::write(&config_path, r#"{"custom": "data"}"#).unwrap();

        strictlen_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .arg("--force")
            .assert()
            .success();

        let content = fs::read_to_string(config_path).unwrap();
        assert!(!content.contains("custom"));
        assert!(content.contains("stricter-line-length"));
    }

    #[cfg(unix)]
    #[test]
    fn force_replaces_symlink_without_touching_target() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".strictlen.jsonc");
        let target_path = temp_dir.path().join("target_file");

        fs::write(&target_path, "Important Data").unwrap();
        symlink(&target_path, &config_path).unwrap();

        strictlen_cmd()
            .current_dir(temp_dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        assert_eq!(fs::read_to_string(&target_path).unwrap(), "Important Data");
        let meta = fs::symlink_metadata(&config_path).unwrap();
        assert!(meta.is_file());
        assert!(!meta.is_symlink());
    }
}

mod rules_command {
    use super::*;

    #[test]
    fn lists_line_length_rule() {
        strictlen_cmd()
            .arg("rules")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "MY000/stricter-line-length [line_length]",
            ))
            .stdout(predicate::str::contains("A more strict version of MD013"));
    }

    #[test]
    fn lists_rules_as_json() {
        let output = strictlen_cmd()
            .args(["rules", "--format", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value[0]["id"], "MY000");
        assert_eq!(value[0]["aliases"][0], "stricter-line-length");
        assert_eq!(value[0]["tags"][0], "line_length");
    }
}

mod config_loading {
    use super::*;

    #[test]
    fn discovers_config_in_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".strictlen.jsonc"),
            r#"{ "options": { "MY000": { "line_length": 10 } } }"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("doc.md"), "short\nthis is past ten\n").unwrap();

        strictlen_cmd()
            .current_dir(temp_dir.path())
            .args(["lint", "doc.md"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("doc.md:2:1 error [MY000]"));
    }

    #[test]
    fn explicit_config_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.json");
        fs::write(&config_path, r#"{ "options": { "stricter-line-length": false } }"#).unwrap();

        strictlen_cmd()
            .arg("--config")
            .arg(&config_path)
            .arg("lint")
            .arg(long_lines_fixture())
            .assert()
            .success()
            .stdout(predicate::str::contains("found 0 issues"));
    }

    #[test]
    fn warning_severity_does_not_fail() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".strictlen.json");
        fs::write(&config_path, r#"{ "options": { "MY000": "warning" } }"#).unwrap();

        strictlen_cmd()
            .arg("--config")
            .arg(&config_path)
            .arg("lint")
            .arg(long_lines_fixture())
            .assert()
            .success()
            .stdout(predicate::str::contains("warning [MY000]"));
    }

    #[test]
    fn invalid_config_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".strictlen.json");
        fs::write(&config_path, r#"{ "options": { "MY000": { "max": 80 } } }"#).unwrap();

        strictlen_cmd()
            .arg("--config")
            .arg(&config_path)
            .arg("lint")
            .arg(long_lines_fixture())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid options"));
    }

    #[test]
    fn missing_config_is_fatal() {
        strictlen_cmd()
            .args(["--config", "/nonexistent/strictlen.json", "lint", "x.md"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to read config"));
    }
}

mod overrides {
    use super::*;

    fn lint_with(flag: &[&str]) -> assert_cmd::assert::Assert {
        strictlen_cmd()
            .arg("lint")
            .arg(long_lines_fixture())
            .args(flag)
            .assert()
    }

    #[test]
    fn raising_limit_clears_report() {
        lint_with(&["--line-length", "200"])
            .success()
            .stdout(predicate::str::contains("found 0 issues"));
    }

    #[test]
    fn code_blocks_checked_when_not_ignored() {
        lint_with(&["--no-ignore-code-blocks"])
            .code(1)
            .stdout(predicate::str::contains("long_lines.md:6:1"))
            .stdout(predicate::str::contains("found 2 issues"));
    }

    #[test]
    fn tables_checked_when_not_ignored() {
        lint_with(&["--no-ignore-tables"])
            .code(1)
            .stdout(predicate::str::contains("long_lines.md:15:1"))
            .stdout(predicate::str::contains("found 2 issues"));
    }

    #[test]
    fn link_punctuation_checked_when_not_ignored() {
        lint_with(&["--no-ignore-link-punctuation"])
            .code(1)
            .stdout(predicate::str::contains("long_lines.md:9:1"))
            .stdout(predicate::str::contains("long_lines.md:11:1").not())
            .stdout(predicate::str::contains("found 2 issues"));
    }

    #[test]
    fn links_checked_when_not_ignored() {
        lint_with(&["--no-ignore-links"])
            .code(1)
            .stdout(predicate::str::contains("long_lines.md:9:1"))
            .stdout(predicate::str::contains("long_lines.md:11:1"))
            .stdout(predicate::str::contains("found 3 issues"));
    }
}

mod json_output {
    use super::*;

    #[test]
    fn emits_parseable_json() {
        let output = strictlen_cmd()
            .arg("lint")
            .arg(long_lines_fixture())
            .args(["--format", "json"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let files = value.as_array().unwrap();
        assert_eq!(files.len(), 1);

        let diagnostics = files[0]["diagnostics"].as_array().unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0]["rule_id"], "MY000");
        assert_eq!(diagnostics[0]["loc"]["start"]["line"], 3);
    }

    #[test]
    fn rejects_unknown_format() {
        strictlen_cmd()
            .arg("lint")
            .arg(long_lines_fixture())
            .args(["--format", "sarif"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }
}
