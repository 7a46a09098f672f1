//! Integration tests for winshape CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.
//! These tests use `get-info --id 0`: handle 0 is never a valid window, so
//! the command fails deterministically on every platform.

use std::process::Command;

/// Execute 'winshape get-info --id 0' and return the output.
/// The lookup always fails; exit status must be non-zero.
fn run_get_info_invalid_handle(extra_args: &[&str]) -> std::process::Output {
    let mut args: Vec<&str> = extra_args.to_vec();
    args.extend(["get-info", "--id", "0"]);

    let output = Command::new(env!("CARGO_BIN_EXE_winshape"))
        .args(&args)
        .output()
        .expect("Failed to execute winshape");

    assert!(
        !output.status.success(),
        "get-info --id 0 should fail, but exited with {:?}",
        output.status.code()
    );

    output
}

// =============================================================================
// Exit Code Behavioral Tests
// =============================================================================

/// Failure paths must return a non-zero exit code
#[test]
fn test_window_not_found_exits_nonzero() {
    let output = run_get_info_invalid_handle(&[]);
    assert_ne!(output.status.code(), Some(0));
}

/// The not-found message is printed for humans on stderr
#[test]
fn test_window_not_found_message_on_stderr() {
    let output = run_get_info_invalid_handle(&[]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "stderr should carry the not-found message, got: {}",
        stderr
    );
}

/// set-resolution against a dead handle fails before any resize attempt
#[test]
fn test_set_resolution_invalid_handle_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_winshape"))
        .args([
            "set-resolution",
            "--id",
            "0",
            "--width",
            "1280",
            "--height",
            "720",
        ])
        .output()
        .expect("Failed to execute winshape");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

/// revert-borderless against a dead handle fails at window resolution
#[test]
fn test_revert_borderless_invalid_handle_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_winshape"))
        .args(["revert-borderless", "--id", "0"])
        .output()
        .expect("Failed to execute winshape");

    assert!(!output.status.success());
}

/// Missing selector is a usage error from clap
#[test]
fn test_set_borderless_without_selector_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_winshape"))
        .args(["set-borderless"])
        .output()
        .expect("Failed to execute winshape");

    assert!(!output.status.success());
}

// =============================================================================
// Default Mode (Quiet) Behavioral Tests
// =============================================================================

/// Verify that default mode (no flags) suppresses INFO-level logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let output = run_get_info_invalid_handle(&[]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    // Should NOT contain INFO-level log events
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );

    // Should NOT contain DEBUG-level log events
    assert!(
        !stderr.contains(r#""level":"DEBUG""#),
        "Default mode should suppress DEBUG logs, but stderr contains: {}",
        stderr
    );

    // Should NOT contain WARN-level log events
    assert!(
        !stderr.contains(r#""level":"WARN""#),
        "Default mode should suppress WARN logs, but stderr contains: {}",
        stderr
    );
}

/// Verify that stdout contains only user-facing output (no JSON logs)
#[test]
fn test_stdout_is_clean() {
    let output = run_get_info_invalid_handle(&[]);

    let stdout = String::from_utf8_lossy(&output.stdout);

    // stdout should not contain JSON log lines
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

// =============================================================================
// Verbose Mode Behavioral Tests
// =============================================================================

/// Verify verbose mode (-v) emits INFO logs
#[test]
fn test_verbose_flag_emits_info_logs() {
    let output = run_get_info_invalid_handle(&["-v"]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    // Verbose mode should contain INFO-level log events
    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, but stderr is: {}",
        stderr
    );
}

/// Verify verbose mode works with --verbose long form
#[test]
fn test_verbose_flag_long_form_emits_logs() {
    let output = run_get_info_invalid_handle(&["--verbose"]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""level":"INFO""#),
        "--verbose long form should emit INFO logs, but stderr is: {}",
        stderr
    );
}
