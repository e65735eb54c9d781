//! noughts CLI - Tic-Tac-Toe with time travel
//!
//! This CLI provides:
//! - An interactive game with jump-to-move, undo and redo
//! - Scripted replays with text or JSON output
//! - Random self-play statistics

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{commands, config::CommonConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe with move history", long_about = None)]
struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Emit JSON where supported
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on the terminal
    Play(commands::play::PlayArgs),

    /// Replay a list of moves and print the final position
    Replay(commands::replay::ReplayArgs),

    /// Play random games and report statistics
    Simulate(commands::simulate::SimulateArgs),
}

fn init_tracing(config: &CommonConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = CommonConfig {
        verbose: cli.verbose,
        json: cli.json,
        ..CommonConfig::default()
    };
    init_tracing(&common);

    match cli.command {
        Commands::Play(args) => commands::play::execute(args, &common),
        Commands::Replay(args) => commands::replay::execute(args, &common),
        Commands::Simulate(args) => commands::simulate::execute(args, &common),
    }
}
