//! Tests for the feedback provider

use super::*;
use crate::feedback::FeedbackLayout;
use crate::runner::ProcessOutput;
use crate::test_utils::test_helpers::*;

fn token() -> CancellationToken {
    CancellationToken::new()
}

#[test]
fn test_provider_identity() {
    let provider = CommandNotFound::new(Config::default());
    let info = provider.info();

    assert_eq!(info.name, "cmd-not-found");
    assert_eq!(info.id, "47013747-CB9D-4EBC-9F02-F32B8AB19D48");
    assert!(info.description.contains("Linux"));
}

#[test]
fn test_feedback_for_cargo() {
    let (_dir, _path, config) = config_with_utility();
    let provider = CommandNotFound::with_runner(config, FakeRunner::with_stderr(CARGO_STDERR));

    let item = provider.request_feedback("cargo", true, &token()).unwrap();

    assert_eq!(
        item.header,
        "Command 'cargo' not found, but can be installed with:"
    );
    assert_eq!(
        item.actions,
        vec!["sudo snap install rustup", "sudo apt install cargo"]
    );
    assert_eq!(item.footer, None);
    assert_eq!(item.layout, FeedbackLayout::Compact);
}

#[test]
fn test_feedback_invokes_utility_with_flag() {
    let (_dir, path, config) = config_with_utility();
    let runner = FakeRunner::with_stderr(CARGO_STDERR);
    let provider = CommandNotFound::with_runner(config, runner.clone());

    provider.request_feedback("cargo", true, &token());

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, path);
    assert_eq!(calls[0].args, vec!["--no-failure-msg", "cargo"]);
}

#[test]
fn test_feedback_simple_invocation_variant() {
    let (_dir, _path, mut config) = config_with_utility();
    config.utility.no_failure_msg = false;
    let runner = FakeRunner::with_stderr(CARGO_STDERR);
    let provider = CommandNotFound::with_runner(config, runner.clone());

    provider.request_feedback("cargo", true, &token());

    assert_eq!(runner.calls()[0].args, vec!["cargo"]);
}

#[test]
fn test_feedback_records_suggestions() {
    let (_dir, _path, config) = config_with_utility();
    let provider = CommandNotFound::with_runner(config, FakeRunner::with_stderr(CARGO_STDERR));

    provider.request_feedback("cargo", true, &token());

    assert_eq!(
        provider.predictions("SUDO APT"),
        vec!["sudo apt install cargo"]
    );
    assert_eq!(provider.predictions("sudo snap"), vec!["sudo snap install rustup"]);
    assert!(provider.predictions("snap").is_empty());
}

#[test]
fn test_footer_from_stdout_is_portrait() {
    let (_dir, _path, config) = config_with_utility();
    let runner = FakeRunner::with_output(ProcessOutput {
        stderr: CARGO_STDERR.to_string(),
        stdout: "Run 'sudo apt update' first.\n".to_string(),
        exit_code: Some(127),
    });
    let provider = CommandNotFound::with_runner(config, runner);

    let item = provider.request_feedback("cargo", true, &token()).unwrap();

    assert_eq!(item.footer.as_deref(), Some("Run 'sudo apt update' first."));
    assert_eq!(item.layout, FeedbackLayout::Portrait);
}

#[test]
fn test_similar_command_suggestions() {
    let (_dir, _path, config) = config_with_utility();
    let provider = CommandNotFound::with_runner(config, FakeRunner::with_stderr(SIMILAR_STDERR));

    let item = provider.request_feedback("dor", true, &token()).unwrap();

    assert_eq!(item.layout, FeedbackLayout::Portrait);
    assert_eq!(
        provider.predictions("sudo"),
        vec!["sudo snap install dog", "sudo apt install coreutils"]
    );
}

// =========================================================================
// Absent outcomes
// =========================================================================

#[test]
fn test_unsupported_platform_never_runs() {
    let (_dir, _path, config) = config_with_utility();
    let runner = FakeRunner::with_stderr(CARGO_STDERR);
    let provider = CommandNotFound::with_runner(config, runner.clone());

    assert_eq!(provider.request_feedback("cargo", false, &token()), None);
    assert!(runner.calls().is_empty());
}

#[test]
fn test_script_target_never_runs() {
    let (_dir, _path, config) = config_with_utility();
    let runner = FakeRunner::with_stderr(CARGO_STDERR);
    let provider = CommandNotFound::with_runner(config, runner.clone());

    assert_eq!(provider.request_feedback("deploy.ps1", true, &token()), None);
    assert_eq!(provider.request_feedback("", true, &token()), None);
    assert!(runner.calls().is_empty());
}

#[test]
fn test_missing_utility_never_runs() {
    let runner = FakeRunner::with_stderr(CARGO_STDERR);
    let provider = CommandNotFound::with_runner(config_without_utility(), runner.clone());

    assert_eq!(provider.request_feedback("cargo", true, &token()), None);
    assert!(runner.calls().is_empty());
}

#[test]
fn test_launch_failure_is_absent() {
    let (_dir, _path, config) = config_with_utility();
    let runner = FakeRunner::failing(CnfError::LaunchFailed {
        program: "command-not-found".to_string(),
        reason: "permission denied".to_string(),
    });
    let provider = CommandNotFound::with_runner(config, runner);

    assert_eq!(provider.request_feedback("cargo", true, &token()), None);
}

#[test]
fn test_plain_output_is_absent() {
    let (_dir, _path, config) = config_with_utility();
    let provider = CommandNotFound::with_runner(
        config,
        FakeRunner::with_stderr("xyzzy: command not found\n"),
    );

    assert_eq!(provider.request_feedback("xyzzy", true, &token()), None);
}

#[test]
fn test_absent_result_keeps_previous_suggestions() {
    let (_dir, _path, config) = config_with_utility();
    let provider = CommandNotFound::with_runner(config, FakeRunner::with_stderr(CARGO_STDERR));
    provider.request_feedback("cargo", true, &token());

    assert_eq!(provider.request_feedback("setup.ps1", true, &token()), None);
    assert_eq!(provider.predictions("sudo apt").len(), 1);
}

#[test]
fn test_cancelled_lookup_leaves_session_untouched() {
    let (_dir, _path, config) = config_with_utility();
    let provider = CommandNotFound::with_runner(config, FakeRunner::with_stderr(CARGO_STDERR));
    let cancel_token = token();
    cancel_token.cancel();

    assert_eq!(provider.request_feedback("cargo", true, &cancel_token), None);
    assert!(provider.session().is_empty());
}

// =========================================================================
// Prediction lifecycle
// =========================================================================

#[test]
fn test_predictions_empty_before_any_feedback() {
    let provider = CommandNotFound::with_runner(
        config_without_utility(),
        FakeRunner::with_stderr(CARGO_STDERR),
    );
    assert!(provider.predictions("sudo").is_empty());
}

#[test]
fn test_accepting_a_line_clears_predictions() {
    let (_dir, _path, config) = config_with_utility();
    let provider = CommandNotFound::with_runner(config, FakeRunner::with_stderr(CARGO_STDERR));
    provider.request_feedback("cargo", true, &token());

    provider.command_line_accepted();

    assert!(provider.predictions("").is_empty());
    assert!(provider.predictions("sudo").is_empty());
}

#[test]
fn test_accepts_only_command_line_accepted() {
    let provider = CommandNotFound::new(Config::default());

    assert!(provider.accepts(PredictorEvent::CommandLineAccepted));
    assert!(!provider.accepts(PredictorEvent::CommandLineExecuted));
    assert!(!provider.accepts(PredictorEvent::SuggestionDisplayed));
    assert!(!provider.accepts(PredictorEvent::SuggestionAccepted));
}

#[test]
fn test_notify_dispatches_events() {
    let (_dir, _path, config) = config_with_utility();
    let provider = CommandNotFound::with_runner(config, FakeRunner::with_stderr(CARGO_STDERR));
    provider.request_feedback("cargo", true, &token());

    provider.notify(PredictorEvent::SuggestionDisplayed);
    provider.notify(PredictorEvent::SuggestionAccepted);
    provider.notify(PredictorEvent::CommandLineExecuted);
    assert!(!provider.session().is_empty());

    provider.notify(PredictorEvent::CommandLineAccepted);
    assert!(provider.session().is_empty());
}

#[test]
fn test_new_feedback_replaces_suggestions() {
    let (_dir, _path, config) = config_with_utility();
    let provider = CommandNotFound::with_runner(config, FakeRunner::with_stderr(CARGO_STDERR));
    provider.request_feedback("cargo", true, &token());
    assert!(!provider.predictions("sudo apt install cargo").is_empty());

    // Same session, different utility output
    let provider = CommandNotFound {
        runner: Box::new(FakeRunner::with_stderr(SIMILAR_STDERR)),
        ..provider
    };
    provider.request_feedback("dor", true, &token());

    assert!(provider.predictions("sudo apt install cargo").is_empty());
    assert_eq!(provider.predictions("snap info"), vec!["snap info dog"]);
}

// =========================================================================
// Real process
// =========================================================================

#[test]
fn test_system_runner_end_to_end() {
    // `/bin/sh <script>` stands in for the utility
    let dir = tempfile::TempDir::new().unwrap();
    let script = dir.path().join("fake-utility");
    std::fs::write(
        &script,
        concat!(
            "echo \"Command 'cargo' not found, but can be installed with:\" >&2\n",
            "echo 'sudo apt  install cargo   # version 1.75.0' >&2\n",
            "exit 127\n",
        ),
    )
    .unwrap();

    let mut config = Config::default();
    config.utility.paths = vec![std::path::PathBuf::from("/bin/sh")];
    config.utility.no_failure_msg = false;
    let provider = CommandNotFound::new(config);

    let target = script.to_string_lossy();
    let item = provider.request_feedback(&target, true, &token()).unwrap();

    assert_eq!(item.actions, vec!["sudo apt install cargo"]);
    assert_eq!(provider.predictions("sudo"), vec!["sudo apt install cargo"]);
}
