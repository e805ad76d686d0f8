//! Hexfront CLI - generate boards and play scripted games from the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Hexfront - a hex-grid strategy game engine
#[derive(Parser, Debug)]
#[command(name = "hexfront")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a board and print it
    Board {
        #[command(flatten)]
        game: cli::GameOptions,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Color the text map with ANSI escapes
        #[arg(long)]
        color: bool,
    },

    /// Play a game from a command script (one command per line)
    Play {
        #[command(flatten)]
        game: cli::GameOptions,

        /// Command script (default: stdin)
        #[arg(long)]
        script: Option<std::path::PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Color the text map with ANSI escapes
        #[arg(long)]
        color: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hexfront=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        Commands::Board {
            game,
            format,
            color,
        } => cli::board::execute(&game, format, color),

        Commands::Play {
            game,
            script,
            format,
            color,
        } => cli::play::execute(&game, script, format, color),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
