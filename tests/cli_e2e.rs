//! End-to-end CLI tests for chatlens.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Each export format via CLI
//! - **Report files**: JSON and CSV generation
//! - **Snapshots**: Re-analyzing the last transcript
//! - **Flags**: Verbosity, top words, snapshot control
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with one transcript per export format.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let whatsapp = "\
1/15/24, 10:30 - Alice: Hello everyone! good morning
[1/15/24, 10:31:00] Bob: Hi Alice!
1/15/24, 10:32 - Alice: How is everyone doing?
1/16/24, 09:00 - Bob: pizza tonight? 🍕
1/16/24, 09:05 - Charlie: sounds great
1/16/24, 09:10 - Bob: awesome
see you there";
    fs::write(dir.path().join("whatsapp.txt"), whatsapp).unwrap();

    let telegram = "\
15.01.2024, 18:00 - Дмитрий: Привет
15.01.2024, 18:02 - Anna: hello there
16.01.2024, 08:15 - Anna: good morning";
    fs::write(dir.path().join("telegram.txt"), telegram).unwrap();

    let facebook = "\
3/1/2024, 12:00 - Sam: lunch?
3/1/2024, 12:01 - Kim: sure
3/1/2024, 12:02 - Sam: great";
    fs::write(dir.path().join("facebook.txt"), facebook).unwrap();

    fs::write(dir.path().join("empty.txt"), "nothing to see here\n").unwrap();
    fs::write(dir.path().join("notes.md"), "# not a transcript").unwrap();

    dir
}

fn chatlens_cmd(fixtures: &TempDir) -> Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlens"));
    cmd.current_dir(fixtures.path())
        .env_remove("RUST_LOG")
        .arg("--snapshot-dir")
        .arg(fixtures.path().join("snapshot"));
    Command::from_std(cmd)
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_whatsapp_basic() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg(fixture(&fixtures, "whatsapp.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 6 messages"))
            .stdout(predicate::str::contains("Most active:    Bob"))
            .stdout(predicate::str::contains("2024-01-15 to 2024-01-16"))
            .stdout(predicate::str::contains("Done"));
    }

    #[test]
    fn test_telegram_basic() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .args([fixture(&fixtures, "telegram.txt").as_str(), "-f", "telegram"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 3 messages"))
            .stdout(predicate::str::contains("Дмитрий"))
            .stdout(predicate::str::contains("Most active:    Anna"));
    }

    #[test]
    fn test_facebook_basic() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .args([fixture(&fixtures, "facebook.txt").as_str(), "--format", "fb"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 3 messages"))
            .stdout(predicate::str::contains("Most active:    Sam"));
    }

    #[test]
    fn test_wrong_format_finds_nothing() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .args([fixture(&fixtures, "whatsapp.txt").as_str(), "-f", "tg"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Found 0 messages"))
            .stderr(predicate::str::contains("No messages found"));
    }

    #[test]
    fn test_awards_and_top_words_printed() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg(fixture(&fixtures, "whatsapp.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Awards"))
            .stdout(predicate::str::contains("Most Active"))
            .stdout(predicate::str::contains("Fastest Replier"))
            .stdout(predicate::str::contains("Top words"))
            .stdout(predicate::str::contains("everyone"));
    }
}

// ============================================================================
// Report File Tests
// ============================================================================

mod report_files {
    use super::*;

    #[test]
    fn test_json_report() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.json");

        chatlens_cmd(&fixtures)
            .args([
                fixture(&fixtures, "whatsapp.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Report saved"));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["summary"]["total_messages"], 6);
        assert_eq!(value["summary"]["most_active_user"], "Bob");
        assert_eq!(value["users"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_csv_report() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "users.csv");

        chatlens_cmd(&fixtures)
            .args([
                fixture(&fixtures, "whatsapp.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("Sender;Messages;FirstMessages;AvgSentiment")
        );
        assert!(lines.next().unwrap().starts_with("Alice;2;1;"));
        assert!(lines.next().unwrap().starts_with("Bob;3;1;"));
    }

    #[test]
    fn test_explicit_report_format_overrides_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.out");

        chatlens_cmd(&fixtures)
            .args([
                fixture(&fixtures, "whatsapp.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
                "--report",
                "csv",
            ])
            .assert()
            .success();

        assert!(fs::read_to_string(&output).unwrap().starts_with("Sender;"));
    }

    #[test]
    fn test_unknown_report_extension_fails_early() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.txt");

        chatlens_cmd(&fixtures)
            .args([
                fixture(&fixtures, "whatsapp.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Parsing").not())
            .stderr(predicate::str::contains("Unknown report extension"));

        assert!(!output.exists());
    }
}

// ============================================================================
// Snapshot Tests
// ============================================================================

mod snapshots {
    use super::*;

    #[test]
    fn test_reanalyze_last_transcript() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg(fixture(&fixtures, "whatsapp.txt"))
            .assert()
            .success();

        chatlens_cmd(&fixtures)
            .assert()
            .success()
            .stdout(predicate::str::contains("Restored 6 messages"))
            .stdout(predicate::str::contains("Most active:    Bob"));
    }

    #[test]
    fn test_new_transcript_replaces_snapshot() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg(fixture(&fixtures, "whatsapp.txt"))
            .assert()
            .success();
        chatlens_cmd(&fixtures)
            .args([fixture(&fixtures, "facebook.txt").as_str(), "-f", "facebook"])
            .assert()
            .success();

        chatlens_cmd(&fixtures)
            .assert()
            .success()
            .stdout(predicate::str::contains("Restored 3 messages"))
            .stdout(predicate::str::contains("Most active:    Sam"));
    }

    #[test]
    fn test_rejected_file_keeps_snapshot() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg(fixture(&fixtures, "whatsapp.txt"))
            .assert()
            .success();
        chatlens_cmd(&fixtures)
            .arg(fixture(&fixtures, "notes.md"))
            .assert()
            .failure();

        chatlens_cmd(&fixtures)
            .assert()
            .success()
            .stdout(predicate::str::contains("Restored 6 messages"));
    }

    #[test]
    fn test_no_snapshot_flag() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .args([fixture(&fixtures, "whatsapp.txt").as_str(), "--no-snapshot"])
            .assert()
            .success();

        assert!(!fixtures.path().join("snapshot").exists());

        chatlens_cmd(&fixtures)
            .assert()
            .failure()
            .stderr(predicate::str::contains("no saved transcript"));
    }

    #[test]
    fn test_no_input_and_no_snapshot() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .assert()
            .failure()
            .stderr(predicate::str::contains("❌ Error"))
            .stderr(predicate::str::contains("no saved transcript"));
    }

    #[test]
    fn test_corrupt_snapshot_is_reported() {
        let fixtures = setup_fixtures();
        let snapshot_dir = fixtures.path().join("snapshot");
        fs::create_dir_all(&snapshot_dir).unwrap();
        fs::write(snapshot_dir.join("chat_data.json"), "not json").unwrap();

        chatlens_cmd(&fixtures)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Snapshot 'chat_data' error"));
    }
}

// ============================================================================
// Flag Tests
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_top_words_limit() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .args([fixture(&fixtures, "whatsapp.txt").as_str(), "--top", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("    1. "))
            .stdout(predicate::str::contains("    2. ").not());
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .args([fixture(&fixtures, "whatsapp.txt").as_str(), "-v"])
            .assert()
            .success()
            .stderr(predicate::str::contains("transcript loaded"));
    }

    #[test]
    fn test_quiet_by_default() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg(fixture(&fixtures, "whatsapp.txt"))
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_help() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("EXAMPLES"))
            .stdout(predicate::str::contains("--snapshot-dir"));
    }

    #[test]
    fn test_version() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_nonexistent_file() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg("nonexistent_file.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_wrong_file_type() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg(fixture(&fixtures, "notes.md"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Please provide a text file"));
    }

    #[test]
    fn test_invalid_format_option() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .args([fixture(&fixtures, "whatsapp.txt").as_str(), "-f", "signal"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn test_empty_result() {
        let fixtures = setup_fixtures();

        chatlens_cmd(&fixtures)
            .arg(fixture(&fixtures, "empty.txt"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("No messages recognized"))
            .stderr(predicate::str::contains("❌ Error"));
    }
}
