//! `cnf` command-line interface

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::config::{load_config, load_config_from_path};
use crate::parser::parse_output;
use crate::provider::{CommandNotFound, PredictorEvent};

/// The utility only exists on Linux distributions
pub const PLATFORM_SUPPORTED: bool = cfg!(target_os = "linux");

#[derive(Debug, Parser)]
#[command(name = "cnf", version, about = "Command-not-found feedback and suggestions")]
pub struct Cli {
    /// Config file to use instead of ~/.config/cnf/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Explain why COMMAND was not found and how to install it
    Lookup {
        command: String,
        /// Print the feedback as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse captured utility stderr from stdin
    Parse {
        /// File holding the utility's captured stdout
        #[arg(long, value_name = "PATH")]
        stdout_file: Option<PathBuf>,
        /// Print the full parse result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer feedback/predict/accept requests, one per stdin line
    Session,
}

pub fn run(cli: Cli) -> Result<()> {
    let loaded = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    if let Some(warning) = &loaded.warning {
        log::warn!("{}", warning);
    }

    let stdout = io::stdout();
    match cli.command {
        Command::Lookup { command, json } => {
            let provider = CommandNotFound::new(loaded.config);
            lookup(&provider, &command, json, &mut stdout.lock())
        }
        Command::Parse { stdout_file, json } => {
            let mut stderr_text = String::new();
            io::stdin().lock().read_to_string(&mut stderr_text)?;
            let stdout_text = stdout_file.map(fs::read_to_string).transpose()?;
            parse(&stderr_text, stdout_text.as_deref(), json, &mut stdout.lock())
        }
        Command::Session => {
            let provider = CommandNotFound::new(loaded.config);
            serve_session(&provider, io::stdin().lock(), stdout.lock(), PLATFORM_SUPPORTED)?;
            Ok(())
        }
    }
}

/// Print feedback for `command`; prints nothing when there is none
pub fn lookup<W: Write>(
    provider: &CommandNotFound,
    command: &str,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let cancel_token = CancellationToken::new();
    let Some(item) = provider.request_feedback(command, PLATFORM_SUPPORTED, &cancel_token) else {
        return Ok(());
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&item)?)?;
    } else {
        writeln!(out, "{}", item.render())?;
    }
    Ok(())
}

pub fn parse<W: Write>(
    stderr_text: &str,
    stdout_text: Option<&str>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let result = parse_output(stderr_text.lines(), stdout_text);

    if json {
        let value = json!({
            "present": result.is_present(),
            "result": result,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    let Ok((item, suggestions)) = result.into_feedback() else {
        return Ok(());
    };
    writeln!(out, "{}", item.render())?;
    writeln!(out)?;
    writeln!(out, "Suggestions:")?;
    for suggestion in suggestions {
        writeln!(out, "  {}", suggestion)?;
    }
    Ok(())
}

/// Line protocol for running as a shell co-process
///
/// Requests:
/// ```text
/// feedback <command>
/// predict <partial input>
/// accept
/// quit
/// ```
/// Each request except `quit` gets one JSON object on its own line.
pub fn serve_session<R: BufRead, W: Write>(
    provider: &CommandNotFound,
    input: R,
    mut output: W,
    platform_supported: bool,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let (verb, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));

        let reply = match verb {
            "" => continue,
            "quit" => break,
            "feedback" => {
                let cancel_token = CancellationToken::new();
                let feedback = provider.request_feedback(rest, platform_supported, &cancel_token);
                json!({ "feedback": feedback })
            }
            "predict" => json!({ "predictions": provider.predictions(rest) }),
            "accept" => {
                provider.notify(PredictorEvent::CommandLineAccepted);
                json!({ "accepted": true })
            }
            other => {
                log::debug!("Unknown session request {:?}", other);
                json!({ "error": format!("unknown request: {}", other) })
            }
        };

        writeln!(output, "{}", reply)?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
