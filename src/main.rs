use std::io::Write;

use clap::Parser;
use cnf::cli::{self, Cli};
use color_eyre::Result;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    init_logging();

    cli::run(Cli::parse())
}

/// Log to stderr so stdout carries only feedback; `RUST_LOG` overrides the level
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
