//! CLI integration tests.
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn multibase() -> Command {
    Command::cargo_bin("multibase").unwrap()
}

#[test]
fn test_help() {
    multibase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multibase"));
}

#[test]
fn test_list_encodings() {
    multibase()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base58btc"))
        .stdout(predicate::str::contains("base64urlpad"));
}

#[test]
fn test_encode_base16() {
    multibase()
        .args(["--encoding", "base16"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("68656c6c6f\n");
}

#[test]
fn test_encode_multibase_prefix() {
    multibase()
        .args(["--encoding", "base58btc", "--multibase"])
        .write_stdin("elephant")
        .assert()
        .success()
        .stdout("zHxwBpKd9UKM\n");
}

#[test]
fn test_decode_multibase() {
    multibase()
        .arg("--decode")
        .write_stdin("f68656c6c6f")
        .assert()
        .success()
        .stdout("hello");
}

#[test]
fn test_decode_with_explicit_encoding() {
    multibase()
        .args(["--decode", "--encoding", "base64pad"])
        .write_stdin("aGVsbG8gd29ybGQ=")
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn test_roundtrip_base36() {
    let encoded = multibase()
        .args(["--encoding", "base36", "--multibase"])
        .write_stdin("binary \x00 data")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    multibase()
        .arg("--decode")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("binary \x00 data");
}

#[test]
fn test_unknown_encoding_fails() {
    multibase()
        .args(["--encoding", "base1337"])
        .write_stdin("data")
        .assert()
        .failure()
        .stderr(predicate::str::contains("base1337"));
}

#[test]
fn test_encode_requires_encoding() {
    multibase()
        .write_stdin("data")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--encoding"));
}

#[test]
fn test_decode_invalid_character_fails() {
    multibase()
        .arg("--decode")
        .write_stdin("z\\=+BpKd9UKM")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid character"));
}
