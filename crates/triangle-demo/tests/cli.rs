//! Drives the `triangle` binary through the option paths that exit before
//! a window is opened.

use std::process::{Command, Output};

fn triangle(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_triangle"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn triangle binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn help_prints_usage_and_succeeds() {
    for flag in ["-h", "--help"] {
        let out = triangle(&[flag]);
        assert_eq!(out.status.code(), Some(0), "{flag}");
        assert!(stdout(&out).starts_with("Usage: triangle [OPTION]..."), "{}", stdout(&out));
    }
}

#[test]
fn help_wins_over_preceding_options() {
    let out = triangle(&["-w", "800", "-x", "-", "--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("--cells-in-x=X"));
    assert!(!stdout(&out).contains("window width:"));
}

#[test]
fn unknown_option_prints_usage_and_fails() {
    let out = triangle(&["--bogus"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Usage: triangle"));
    assert!(stderr(&out).contains("--bogus"), "{}", stderr(&out));
}

#[test]
fn missing_value_prints_usage_and_fails() {
    let out = triangle(&["--width"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Usage: triangle"));
}

#[test]
fn zero_value_names_the_option() {
    let out = triangle(&["-x", "0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains("`cells-in-x` must be a number greater than zero!"),
        "{}",
        stderr(&out)
    );
    assert!(stdout(&out).is_empty());
}

#[test]
fn non_numeric_value_names_the_option() {
    let out = triangle(&["--cells-in-x=abc"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("`cells-in-x`"));
}

#[test]
fn invalid_value_after_help_is_never_reached() {
    let out = triangle(&["-h", "-z", "0"]);
    assert_eq!(out.status.code(), Some(0));
}
