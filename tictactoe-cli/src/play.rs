//! Play command - interactive two-player session
//!
//! Drives one `Game` from stdin: gather names, loop over turns, announce the
//! outcome, offer a restart that keeps the player names.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Args;
use tictactoe_core::{Game, Mark, TurnError, TurnOutcome};

use crate::render::format_board;

#[derive(Args)]
pub struct PlayArgs {
    /// Name for the X player (prompted for when omitted)
    #[arg(long, value_name = "NAME")]
    pub player_x: Option<String>,

    /// Name for the O player (prompted for when omitted)
    #[arg(long, value_name = "NAME")]
    pub player_o: Option<String>,
}

/// Run the interactive session
pub fn run(args: PlayArgs) -> Result<()> {
    let name_x = resolve_name(args.player_x, "Player X name: ")?;
    let name_o = resolve_name(args.player_o, "Player O name: ")?;

    let mut game = Game::new();
    game.start_game(&name_x, &name_o);
    tracing::info!(
        "Session started: {} (X) vs {} (O)",
        game.players()[0].name(),
        game.players()[1].name()
    );

    loop {
        play_round(&mut game)?;

        if !prompt_restart()? {
            break;
        }
        game.reset_game();
        tracing::info!("Board reset, {} opens the round", game.current_player().name());
    }

    Ok(())
}

/// Play turns until the round ends in a win or draw
fn play_round(game: &mut Game) -> Result<()> {
    loop {
        println!("\n{}\n", format_board(game.board()));

        let player = game.current_player();
        let prompt = format!("{}'s turn ({}), pick a cell: ", player.name(), player.mark());
        let Some(line) = read_line(&prompt)? else {
            bail!("input ended mid-game");
        };

        let index = match parse_cell_index(line.trim()) {
            Ok(index) => index,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match game.play_turn(index) {
            Ok(TurnOutcome::Won(mark)) => {
                println!("\n{}\n", format_board(game.board()));
                println!("{} wins! ({})", name_of(game, mark), mark);
                tracing::info!("Round won by {} ({})", name_of(game, mark), mark);
                return Ok(());
            }
            Ok(TurnOutcome::Draw) => {
                println!("\n{}\n", format_board(game.board()));
                println!("Draw!");
                tracing::info!("Round ended in a draw");
                return Ok(());
            }
            Ok(TurnOutcome::Ongoing) => {}
            Err(err) => println!("{}", describe_rejection(err)),
        }
    }
}

/// Take a name from the flag or keep prompting until one is given
fn resolve_name(flag: Option<String>, prompt: &str) -> Result<String> {
    if let Some(name) = flag {
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    loop {
        let Some(line) = read_line(prompt)? else {
            bail!("input ended before a name was given");
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            println!("A name is required to start.");
            continue;
        }
        return Ok(trimmed.to_string());
    }
}

fn prompt_restart() -> Result<bool> {
    let Some(line) = read_line("Play again? [y/N] ")? else {
        return Ok(false);
    };
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}

/// Prompted line read; `None` when stdin is closed
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn parse_cell_index(input: &str) -> std::result::Result<usize, String> {
    if input.is_empty() {
        return Err("Enter a cell index (0-8).".to_string());
    }
    input
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a cell index - enter a number 0-8", input))
}

/// Translate a core rejection into a user-visible message
fn describe_rejection(err: TurnError) -> &'static str {
    match err {
        TurnError::NotStarted => "Enter names and start a game first.",
        TurnError::GameOver => "The round is over - restart to keep playing.",
        TurnError::Occupied => "That cell is taken, pick another.",
        TurnError::OutOfRange => "Pick a cell between 0 and 8.",
    }
}

fn name_of(game: &Game, mark: Mark) -> &str {
    game.players()
        .iter()
        .find(|player| player.mark() == mark)
        .map(|player| player.name())
        .unwrap_or_default()
}
