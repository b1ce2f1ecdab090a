//! Tests for the system runner

use std::path::PathBuf;
use std::time::Instant;

use super::*;

fn sh() -> PathBuf {
    PathBuf::from("/bin/sh")
}

#[test]
fn test_captures_stdout_stderr_and_exit_code() {
    let cancel_token = CancellationToken::new();
    let output = SystemRunner
        .run(&sh(), &["-c", "echo out; echo err >&2; exit 3"], &cancel_token)
        .unwrap();

    assert_eq!(output.stdout, "out\n");
    assert_eq!(output.stderr, "err\n");
    assert_eq!(output.exit_code, Some(3));
}

#[test]
fn test_stderr_lines() {
    let cancel_token = CancellationToken::new();
    let output = SystemRunner
        .run(&sh(), &["-c", "printf 'a\\n\\nb\\n' >&2"], &cancel_token)
        .unwrap();

    let lines: Vec<&str> = output.stderr_lines().collect();
    assert_eq!(lines, vec!["a", "", "b"]);
}

#[test]
fn test_arguments_are_passed_verbatim() {
    let cancel_token = CancellationToken::new();
    let output = SystemRunner
        .run(
            &sh(),
            &["-c", "printf '%s|' \"$@\" >&2", "sh", "--no-failure-msg", "cargo"],
            &cancel_token,
        )
        .unwrap();

    assert_eq!(output.stderr, "--no-failure-msg|cargo|");
}

#[test]
fn test_large_output_does_not_block() {
    let cancel_token = CancellationToken::new();
    let output = SystemRunner
        .run(
            &sh(),
            &["-c", "i=0; while [ $i -lt 20000 ]; do echo line $i >&2; i=$((i+1)); done"],
            &cancel_token,
        )
        .unwrap();

    assert_eq!(output.stderr_lines().count(), 20000);
}

#[test]
fn test_missing_program_is_launch_failure() {
    let cancel_token = CancellationToken::new();
    let result = SystemRunner.run(
        Path::new("/nonexistent/command-not-found"),
        &["cargo"],
        &cancel_token,
    );

    match result {
        Err(CnfError::LaunchFailed { program, .. }) => {
            assert_eq!(program, "/nonexistent/command-not-found");
        }
        other => panic!("Expected LaunchFailed, got {:?}", other),
    }
}

#[test]
fn test_already_cancelled_does_not_spawn() {
    let cancel_token = CancellationToken::new();
    cancel_token.cancel();

    let result = SystemRunner.run(Path::new("/nonexistent/program"), &[], &cancel_token);
    assert_eq!(result, Err(CnfError::Cancelled));
}

#[test]
fn test_cancel_kills_running_process() {
    let cancel_token = CancellationToken::new();
    let trigger = cancel_token.clone();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(50));
        trigger.cancel();
    });

    let start = Instant::now();
    let result = SystemRunner.run(&sh(), &["-c", "exec sleep 30"], &cancel_token);

    assert_eq!(result, Err(CnfError::Cancelled));
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[test]
fn test_cancel_while_background_process_holds_pipes() {
    let cancel_token = CancellationToken::new();
    let trigger = cancel_token.clone();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(50));
        trigger.cancel();
    });

    // The shell exits at once but the backgrounded sleep keeps stdout open
    let start = Instant::now();
    let result = SystemRunner.run(&sh(), &["-c", "sleep 20 & exit 0"], &cancel_token);

    assert_eq!(result, Err(CnfError::Cancelled));
    assert!(start.elapsed() < Duration::from_secs(10));
}
