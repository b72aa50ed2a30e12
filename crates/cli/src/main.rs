// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hdur - humanize durations from the command line

mod commands;
mod env;
mod exit_error;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{format, languages};

#[derive(Parser)]
#[command(
    name = "hdur",
    version,
    about = "Turn millisecond durations into human-readable phrases"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Humanize durations given in milliseconds
    Format(format::FormatArgs),
    /// List built-in language ids
    Languages,
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    setup_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors exit 1
            let code = if e.use_stderr() {
                exit_error::EXIT_CONFIG
            } else {
                0
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr so stdout carries only results. RUST_LOG overrides the
/// default `warn` level.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Render an error and its causes on one line, separated by ": ".
///
/// A cause already spelled out by the message before it is skipped, so
/// `#[error("... {0}")]` variants do not print their source twice.
fn format_error(err: &anyhow::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if text.is_empty() || parts.last().is_some_and(|last| last.contains(&text)) {
            continue;
        }
        parts.push(text);
    }
    parts.join(": ")
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided, print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Format(args) => format::handle(args, format),
        Commands::Languages => languages::handle(format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
