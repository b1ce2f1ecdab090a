//! Running the command-not-found utility
//!
//! [`ProcessRunner`] is the seam between the feedback provider and the OS.
//! [`SystemRunner`] spawns a real process; tests substitute their own.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, sleep};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::CnfError;

const POLL_INTERVAL_MS: u64 = 10;

/// Captured output of one utility run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stderr: String,
    pub stdout: String,
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn stderr_lines(&self) -> std::str::Lines<'_> {
        self.stderr.lines()
    }
}

/// Runs an external program to completion or cancellation
pub trait ProcessRunner: Send + Sync {
    fn run(
        &self,
        program: &Path,
        args: &[&str],
        cancel_token: &CancellationToken,
    ) -> Result<ProcessOutput, CnfError>;
}

/// Runs programs with `std::process`
///
/// Polls `try_wait()` so cancellation is noticed between polls, and drains
/// both pipes on helper threads so a chatty child cannot block on a full
/// pipe. There is no timeout; only the cancellation token stops a run.
/// The token is still honored after the child exits, while its pipes are
/// held open by a process it left behind.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(
        &self,
        program: &Path,
        args: &[&str],
        cancel_token: &CancellationToken,
    ) -> Result<ProcessOutput, CnfError> {
        if cancel_token.is_cancelled() {
            return Err(CnfError::Cancelled);
        }

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CnfError::LaunchFailed {
                program: program.display().to_string(),
                reason: e.to_string(),
            })?;

        let stdout_reader = child.stdout.take().map(drain);
        let stderr_reader = child.stderr.take().map(drain);

        loop {
            if cancel_token.is_cancelled() {
                let _ = child.kill();
                let _ = child.wait();
                log::debug!("Cancelled run of {}", program.display());
                return Err(CnfError::Cancelled);
            }

            match child
                .try_wait()
                .map_err(|e| CnfError::OutputReadFailed(e.to_string()))?
            {
                Some(status) => {
                    let stdout = collect(stdout_reader, cancel_token)?;
                    let stderr = collect(stderr_reader, cancel_token)?;
                    return Ok(ProcessOutput {
                        stderr,
                        stdout,
                        exit_code: status.code(),
                    });
                }
                None => sleep(Duration::from_millis(POLL_INTERVAL_MS)),
            }
        }
    }
}

type Drain = Receiver<std::io::Result<Vec<u8>>>;

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Drain {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let result = pipe.read_to_end(&mut buf).map(|_| buf);
        let _ = tx.send(result);
    });
    rx
}

fn collect(reader: Option<Drain>, cancel_token: &CancellationToken) -> Result<String, CnfError> {
    let Some(rx) = reader else {
        return Ok(String::new());
    };
    loop {
        match rx.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS)) {
            Ok(result) => {
                let buf = result.map_err(|e| CnfError::OutputReadFailed(e.to_string()))?;
                return Ok(String::from_utf8_lossy(&buf).into_owned());
            }
            Err(RecvTimeoutError::Timeout) => {
                if cancel_token.is_cancelled() {
                    // The reader thread stays blocked until the pipe closes
                    log::debug!("Cancelled while waiting for pipe EOF");
                    return Err(CnfError::Cancelled);
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(CnfError::OutputReadFailed(
                    "pipe reader panicked".to_string(),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
