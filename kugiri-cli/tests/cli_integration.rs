//! Integration tests for the kugiri CLI

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a test file with the given content
fn create_test_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Encode a string as UTF-16LE bytes
fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
}

fn kugiri() -> Command {
    Command::cargo_bin("kugiri").expect("Failed to find kugiri binary")
}

#[test]
fn test_version_flag() {
    kugiri()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kugiri"));
}

#[test]
fn test_help_lists_subcommands() {
    kugiri()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("segment"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn test_no_subcommand_fails_with_usage() {
    kugiri()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_segment_file_to_sentences() {
    let dir = TempDir::new().unwrap();
    let input = create_test_file(&dir, "input.txt", b"First one. Second two.");

    kugiri()
        .arg("segment")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout("First one.\nSecond two.\n");
}

#[test]
fn test_segment_stdin_by_default() {
    kugiri()
        .arg("segment")
        .write_stdin("Hello. World.")
        .assert()
        .success()
        .stdout("Hello.\nWorld.\n");
}

#[test]
fn test_segment_words_skipping_whitespace() {
    kugiri()
        .args(["segment", "--kind", "word", "--skip-whitespace"])
        .write_stdin("Hi there")
        .assert()
        .success()
        .stdout("Hi\nthere\n");
}

#[test]
fn test_segment_json_format() {
    kugiri()
        .args(["segment", "--format", "json"])
        .write_stdin("Hello. World.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"Hello. \""))
        .stdout(predicate::str::contains("\"start\": 7"))
        .stdout(predicate::str::contains("\"end\": 13"));
}

#[test]
fn test_segment_offsets_format() {
    kugiri()
        .args(["segment", "--kind", "grapheme", "--format", "offsets"])
        .write_stdin("Hi.")
        .assert()
        .success()
        .stdout("0..1\t\"H\"\n1..2\t\"i\"\n2..3\t\".\"\n");
}

#[test]
fn test_segment_multiple_input_files() {
    let dir = TempDir::new().unwrap();
    let first = create_test_file(&dir, "first.txt", b"One.");
    let second = create_test_file(&dir, "second.txt", b"Two.");

    kugiri()
        .arg("segment")
        .arg("-i")
        .arg(&first)
        .arg("-i")
        .arg(&second)
        .assert()
        .success()
        .stdout("One.\nTwo.\n");
}

#[test]
fn test_segment_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");

    kugiri()
        .arg("segment")
        .arg("--output")
        .arg(&output)
        .write_stdin("Alpha. Beta.")
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Alpha.\nBeta.\n");
}

#[test]
fn test_malformed_bytes_replaced_by_default() {
    let dir = TempDir::new().unwrap();
    let input = create_test_file(&dir, "bad.txt", &[0x61, 0xFF]);

    kugiri()
        .args(["segment", "--kind", "grapheme"])
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("a\n\u{FFFD}\n");
}

#[test]
fn test_strict_mode_rejects_malformed_bytes() {
    let dir = TempDir::new().unwrap();
    let input = create_test_file(&dir, "bad.txt", &[0x61, 0xFF]);

    kugiri()
        .args(["segment", "--strict"])
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_segment_utf16le_input() {
    let dir = TempDir::new().unwrap();
    let input = create_test_file(&dir, "wide.txt", &utf16le("Hi. Yo."));

    kugiri()
        .args(["segment", "--encoding", "utf16le"])
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("Hi.\nYo.\n");
}

#[test]
fn test_abbreviation_overlay_replaces_builtins() {
    let dir = TempDir::new().unwrap();
    let overlay = create_test_file(
        &dir,
        "abbrev.toml",
        b"[suppressions]\ncustom = [\"Zz\"]\n",
    );

    // Built-in list knows "Mr", so the default run keeps the sentence whole.
    kugiri()
        .arg("segment")
        .write_stdin("Mr. Smith waits.")
        .assert()
        .success()
        .stdout("Mr. Smith waits.\n");

    // The overlay replaces the built-ins, so "Mr." now terminates.
    kugiri()
        .arg("segment")
        .arg("--abbreviations")
        .arg(&overlay)
        .write_stdin("Mr. Smith waits.")
        .assert()
        .success()
        .stdout("Mr.\nSmith waits.\n");
}

#[test]
fn test_missing_input_file_fails() {
    kugiri()
        .args(["segment", "-i", "no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_kind_fails() {
    kugiri()
        .args(["segment", "--kind", "paragraph"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_inspect_dumps_classes() {
    kugiri()
        .args(["inspect", "ab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("U+0061"))
        .stdout(predicate::str::contains("ALetter"));
}

#[test]
fn test_inspect_single_kind() {
    kugiri()
        .args(["inspect", "--kind", "sentence", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lower"))
        .stdout(predicate::str::contains("grapheme").not());
}

#[test]
fn test_inspect_reads_stdin() {
    kugiri()
        .arg("inspect")
        .write_stdin("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("U+0037"));
}
