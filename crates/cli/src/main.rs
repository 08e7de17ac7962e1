// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hostdef - JSON host definition loader

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, show};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "hostdef",
    version,
    about = "Load, validate and inspect JSON host definition files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate host files
    Check(check::CheckArgs),
    /// Print the hosts loaded from each file
    Show(show::ShowArgs),
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check(args) => {
            debug!(files = args.files.files.len(), "running check");
            check::check(args)
        }
        Commands::Show(args) => {
            debug!(files = args.files.files.len(), format = ?args.format, "running show");
            show::show(args)
        }
    }
}

fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // stdout is reserved for command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
