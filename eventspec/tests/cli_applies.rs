//! CLI tests for `eventspec applies`.
//!
//! Spawns the binary and checks printed result and exit code for allow-list,
//! deny-list, and unrestricted filters.

use std::process::Command;

use eventspec::exit_codes;

fn run_applies(args: &[&str]) -> (Option<i32>, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_eventspec"))
        .arg("applies")
        .args(args)
        .output()
        .expect("eventspec applies");
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).trim().to_string(),
    )
}

#[test]
fn allow_list_match_exits_ok() {
    let (code, stdout) = run_applies(&["--on", "save,delete", "save"]);
    assert_eq!(code, Some(exit_codes::OK));
    assert_eq!(stdout, "true");
}

#[test]
fn allow_list_miss_exits_not_applicable() {
    let (code, stdout) = run_applies(&["--on", "save", "--on", "delete", "view"]);
    assert_eq!(code, Some(exit_codes::NOT_APPLICABLE));
    assert_eq!(stdout, "false");
}

#[test]
fn deny_list_excludes_event() {
    let (code, _) = run_applies(&["--on", "!delete", "delete"]);
    assert_eq!(code, Some(exit_codes::NOT_APPLICABLE));
    let (code, _) = run_applies(&["--on", "!delete", "save"]);
    assert_eq!(code, Some(exit_codes::OK));
}

#[test]
fn no_filter_applies_to_everything() {
    let (code, stdout) = run_applies(&["anything"]);
    assert_eq!(code, Some(exit_codes::OK));
    assert_eq!(stdout, "true");
}
