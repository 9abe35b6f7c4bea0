use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn rejects_warning_threshold_above_duration() {
    cargo_bin_cmd!("slidetimer")
        .args(["talk.pdf", "5", "8", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("0 < Z < Y < X"))
        .stderr(predicate::str::contains("Window opened").not());
}

#[test]
fn rejects_non_positive_critical_threshold() {
    cargo_bin_cmd!("slidetimer")
        .args(["talk.pdf", "10", "5", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Z=0"));
}

#[test]
fn validation_happens_before_the_pdf_is_read() {
    // The file does not exist; the threshold error must win.
    cargo_bin_cmd!("slidetimer")
        .args(["no-such-file.pdf", "10", "10", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("0 < Z < Y < X"))
        .stderr(predicate::str::contains("no-such-file.pdf").not());
}

#[test]
fn wrong_arity_is_a_usage_error() {
    cargo_bin_cmd!("slidetimer")
        .args(["talk.pdf", "10", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_pdf_fails_without_a_window() {
    cargo_bin_cmd!("slidetimer")
        .args(["no-such-file.pdf", "10", "5", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Window opened").not());
}
