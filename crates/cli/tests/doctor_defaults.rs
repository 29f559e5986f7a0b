use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn prdraft() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("prdraft"))
}

#[test]
fn doctor_succeeds_with_defaults_when_config_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = prdraft();
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir, no config
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   prdraft doctor"))
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("template: built-in default"))
        .stdout(predicate::str::contains("logging.level: info"));
}

#[test]
fn doctor_fails_when_explicit_config_is_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = prdraft();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["doctor", "--config"]).arg(tmp.path().join("nope.toml"));
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL prdraft doctor"))
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn doctor_reports_configured_values() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("prdraft");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "version = 1\n\n[logging]\nlevel = \"debug\"\n")
        .unwrap();

    let mut cmd = prdraft();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   prdraft doctor"))
        .stdout(predicate::str::contains("logging.level: debug"));
}

#[test]
fn doctor_rejects_bad_schema_version() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "version = 9\n").unwrap();

    let mut cmd = prdraft();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["doctor", "--config"]).arg(&path);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL prdraft doctor"))
        .stdout(predicate::str::contains("unsupported"));
}
