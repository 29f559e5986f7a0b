use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::{tempdir, TempDir};

fn prdraft(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("prdraft"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd
}

fn init_template(tmp: &TempDir) -> PathBuf {
    let file = tmp.path().join("PR.md");
    prdraft(tmp).arg("init").arg(&file).assert().success();
    file
}

#[test]
fn merge_appends_insights_into_the_summary() {
    let tmp = tempdir().unwrap();
    let file = init_template(&tmp);

    prdraft(&tmp)
        .arg("merge")
        .arg(&file)
        .args(["--insights", "* Adds retries to the uploader."])
        .assert()
        .success()
        .stdout(predicate::str::contains("appended: 1"));

    let doc = std::fs::read_to_string(&file).unwrap();
    assert!(doc.contains("* Adds retries to the uploader."));
}

#[test]
fn merge_is_idempotent_per_line() {
    let tmp = tempdir().unwrap();
    let file = init_template(&tmp);

    let args = ["--insights", "* One-shot insight."];
    prdraft(&tmp).arg("merge").arg(&file).args(args).assert().success();
    prdraft(&tmp)
        .arg("merge")
        .arg(&file)
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("appended: 0"))
        .stdout(predicate::str::contains("duplicates: 1"));
}

#[test]
fn merge_creates_a_leading_summary_in_a_bare_document() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("PR.md");
    std::fs::write(&file, "**Testing**\n* ✅ done\n").unwrap();

    prdraft(&tmp)
        .arg("merge")
        .arg(&file)
        .args(["--insights", "Summary first."])
        .assert()
        .success();

    let doc = std::fs::read_to_string(&file).unwrap();
    assert!(doc.starts_with("**Summary**\nSummary first.\n"), "got: {doc}");
}

#[test]
fn share_section_with_only_placeholders_fails() {
    let tmp = tempdir().unwrap();
    let file = init_template(&tmp);

    prdraft(&tmp)
        .arg("share")
        .arg(&file)
        .args(["--heading", "**Tickets & Tracking**"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing shareable"));
}

#[test]
fn share_clean_section_passes_through_silently() {
    let tmp = tempdir().unwrap();
    let file = init_template(&tmp);

    prdraft(&tmp)
        .arg("share")
        .arg(&file)
        .args(["--heading", "**Summary**"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Motivation and background."))
        .stderr(predicate::str::contains("note:").not());
}

#[test]
fn share_whole_document_trims_and_warns() {
    let tmp = tempdir().unwrap();
    let file = init_template(&tmp);

    prdraft(&tmp)
        .arg("share")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Summary**"))
        .stdout(predicate::str::contains("ABC-123").not())
        .stderr(predicate::str::contains("placeholders were removed"));
}
