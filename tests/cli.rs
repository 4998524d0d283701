use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use sealnote::config::{paths::SealPaths, settings::Settings};
use sealnote::crypto::key_derivation::MIN_ITERATIONS;
use sealnote::crypto::KdfParams;
use sealnote::envelope::{FixedClock, Sealer};
use sealnote::error::UNREADABLE_MESSAGE;

fn config_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());
    Settings {
        kdf: KdfParams::with_iterations(MIN_ITERATIONS),
        ..Settings::default()
    }
    .save(&paths)
    .unwrap();
    temp_dir
}

fn sealnote(config: &TempDir, password: &str) -> Command {
    let mut cmd = Command::cargo_bin("sealnote").unwrap();
    cmd.env("SEALNOTE_CONFIG_DIR", config.path())
        .env("SEALNOTE_PASSWORD", password)
        .env_remove("RUST_LOG");
    cmd
}

fn seal(config: &TempDir, message: &str, password: &str) -> String {
    let output = sealnote(config, password)
        .args(["seal", "--message", message])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn seal_then_open() {
    let config = config_dir();
    let envelope = seal(&config, "hello", "secret123");

    sealnote(&config, "secret123")
        .args(["open", &envelope])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn open_reads_stdin() {
    let config = config_dir();
    let envelope = seal(&config, "piped", "pw");

    sealnote(&config, "pw")
        .arg("open")
        .write_stdin(format!("{}\n", envelope))
        .assert()
        .success()
        .stdout("piped\n");
}

#[test]
fn wrong_password_shows_generic_notice() {
    let config = config_dir();
    let envelope = seal(&config, "hello", "secret123");

    sealnote(&config, "wrong")
        .args(["open", &envelope])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(UNREADABLE_MESSAGE));
}

#[test]
fn expired_envelope_shows_same_notice() {
    let config = config_dir();
    let old = Sealer::with_clock(KdfParams::with_iterations(MIN_ITERATIONS), FixedClock::new(0))
        .seal("stale", "pw", Some(600))
        .unwrap();

    sealnote(&config, "pw")
        .args(["open", "--ttl", "600", &old])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(UNREADABLE_MESSAGE))
        .stderr(predicate::str::contains("expired").not());
}

#[test]
fn ttl_round_trip() {
    let config = config_dir();
    let output = sealnote(&config, "pw")
        .args(["seal", "--ttl", "600", "--message", "timed"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let envelope = String::from_utf8(output.stdout).unwrap();

    sealnote(&config, "pw")
        .args(["open", "--ttl", "600", envelope.trim()])
        .assert()
        .success()
        .stdout("timed\n");
}

#[test]
fn empty_message_is_rejected() {
    let config = config_dir();

    sealnote(&config, "pw")
        .args(["seal", "--message", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input: message"));
}

#[test]
fn empty_password_is_rejected() {
    let config = config_dir();

    sealnote(&config, "")
        .args(["seal", "--message", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input: password"));
}

#[test]
fn inspect_shows_header() {
    let config = config_dir();
    let envelope = seal(&config, "hello", "pw");

    sealnote(&config, "")
        .args(["inspect", &envelope])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total size:      49 bytes"))
        .stdout(predicate::str::contains("Payload:         5 bytes"));
}

#[test]
fn inspect_rejects_short_envelope() {
    let config = config_dir();

    sealnote(&config, "")
        .args(["inspect", "AAAA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(UNREADABLE_MESSAGE));
}

#[test]
fn config_set_ttl_applies_by_default() {
    let config = config_dir();

    sealnote(&config, "")
        .args(["config", "set-ttl", "600"])
        .assert()
        .success();

    sealnote(&config, "")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default TTL:    600 seconds"));

    let envelope = seal(&config, "defaulted", "pw");

    // Sealed with a timestamp, so opening as plain text yields the record
    sealnote(&config, "pw")
        .args(["open", "--no-ttl", &envelope])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""message":"defaulted""#));

    sealnote(&config, "pw")
        .args(["open", &envelope])
        .assert()
        .success()
        .stdout("defaulted\n");
}

#[test]
fn config_rejects_weak_iterations() {
    let config = config_dir();

    sealnote(&config, "")
        .args(["config", "set-iterations", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KDF iterations must be at least"));
}
