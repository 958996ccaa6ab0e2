//! Tic-tac-toe CLI - terminal frontend
//!
//! Commands:
//! - play: Interactive two-player session
//! - replay: Run a recorded move sequence and report the outcome

use clap::{Parser, Subcommand};

mod play;
mod render;
mod replay;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive two-player session
    Play(play::PlayArgs),
    /// Run a recorded move sequence and report the outcome
    Replay(replay::ReplayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Replay(args) => replay::run(args),
    }
}
