//! Replay command - run a recorded move sequence
//!
//! Applies a comma-separated list of cell indices to a fresh game in turn
//! order, then reports the outcome as text or JSON.

use anyhow::{bail, Context, Result};
use clap::Args;
use tictactoe_core::{Game, Mark, TurnError, TurnOutcome};

use crate::render::format_board;

#[derive(Args)]
pub struct ReplayArgs {
    /// Comma-separated cell indices in turn order (e.g. "0,3,1,4,2")
    #[arg(long, value_name = "LIST")]
    pub moves: String,

    /// Name for the X player
    #[arg(long, default_value = "Player X")]
    pub player_x: String,

    /// Name for the O player
    #[arg(long, default_value = "Player O")]
    pub player_o: String,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// One attempted move and what the engine said about it
#[derive(Clone, Debug)]
struct MoveRecord {
    index: usize,
    mark: Mark,
    result: Result<TurnOutcome, TurnError>,
}

/// Aggregated replay outcome
#[derive(Clone, Debug)]
struct ReplayReport {
    records: Vec<MoveRecord>,
    applied: usize,
    rejected: usize,
    outcome: TurnOutcome,
}

/// Run the replay command
pub fn run(args: ReplayArgs) -> Result<()> {
    let moves = parse_moves(&args.moves)?;

    let mut game = Game::new();
    game.start_game(&args.player_x, &args.player_o);
    tracing::info!(
        "Replaying {} moves: {} (X) vs {} (O)",
        moves.len(),
        game.players()[0].name(),
        game.players()[1].name()
    );

    let report = apply_moves(&mut game, &moves);

    if args.json {
        print_json_report(&game, &report)?;
    } else {
        print_text_report(&game, &report);
    }

    Ok(())
}

/// Parse the move list, rejecting anything that is not a cell index
fn parse_moves(list: &str) -> Result<Vec<usize>> {
    let mut moves = Vec::new();
    for part in list.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let index = part
            .parse::<usize>()
            .with_context(|| format!("invalid move '{}': expected a cell index", part))?;
        moves.push(index);
    }
    if moves.is_empty() {
        bail!("no moves given");
    }
    Ok(moves)
}

/// Apply every move in order, recording rejections instead of stopping
fn apply_moves(game: &mut Game, moves: &[usize]) -> ReplayReport {
    let mut records = Vec::with_capacity(moves.len());
    let mut outcome = TurnOutcome::Ongoing;

    for &index in moves {
        let mark = game.current_player().mark();
        let result = game.play_turn(index);
        match result {
            Ok(turn) if turn.is_terminal() => outcome = turn,
            Ok(_) => {}
            Err(err) => tracing::debug!("move {} rejected: {}", index, err),
        }
        records.push(MoveRecord {
            index,
            mark,
            result,
        });
    }

    let applied = records.iter().filter(|r| r.result.is_ok()).count();
    let rejected = records.len() - applied;
    ReplayReport {
        records,
        applied,
        rejected,
        outcome,
    }
}

/// Human-readable line for the final outcome
fn summarize_outcome(game: &Game, report: &ReplayReport) -> String {
    match report.outcome {
        TurnOutcome::Won(mark) => {
            let winner = game
                .players()
                .iter()
                .find(|player| player.mark() == mark)
                .map(|player| player.name())
                .unwrap_or_default();
            format!("{} wins ({})", winner, mark)
        }
        TurnOutcome::Draw => "Draw".to_string(),
        TurnOutcome::Ongoing => {
            let open = game.board().cells().iter().filter(|c| c.is_none()).count();
            format!("Unfinished ({} cells open)", open)
        }
    }
}

fn print_text_report(game: &Game, report: &ReplayReport) {
    println!("\n=== Replay Result ===");
    println!(
        "Moves applied: {} of {}",
        report.applied,
        report.records.len()
    );
    for record in &report.records {
        match record.result {
            Ok(turn) => println!("  {} -> cell {}: {:?}", record.mark, record.index, turn),
            Err(err) => println!("  {} -> cell {}: rejected ({})", record.mark, record.index, err),
        }
    }
    println!("Outcome: {}", summarize_outcome(game, report));
    println!("\n{}", format_board(game.board()));
}

fn print_json_report(game: &Game, report: &ReplayReport) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonMove {
        index: usize,
        mark: Mark,
        valid: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<TurnError>,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        player_x: &'a str,
        player_o: &'a str,
        applied: usize,
        rejected: usize,
        winner: Option<Mark>,
        draw: bool,
        board: &'a [Option<Mark>],
        moves: Vec<JsonMove>,
    }

    let output = JsonOutput {
        player_x: game.players()[0].name(),
        player_o: game.players()[1].name(),
        applied: report.applied,
        rejected: report.rejected,
        winner: report.outcome.winner(),
        draw: report.outcome == TurnOutcome::Draw,
        board: game.board().cells(),
        moves: report
            .records
            .iter()
            .map(|record| JsonMove {
                index: record.index,
                mark: record.mark,
                valid: record.result.is_ok(),
                reason: record.result.err(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output).context("failed to encode replay report")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_moves("0,3,1").unwrap(), vec![0, 3, 1]);
        assert_eq!(parse_moves(" 4 , 8 ").unwrap(), vec![4, 8]);
        assert!(parse_moves("0,x,1").is_err());
        assert!(parse_moves("").is_err());
        assert!(parse_moves(" , ").is_err());
    }

    #[test]
    fn test_apply_moves_winning_sequence() {
        let mut game = Game::new();
        game.start_game("Alice", "Bob");

        let report = apply_moves(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(report.applied, 5);
        assert_eq!(report.rejected, 0);
        assert_eq!(report.outcome, TurnOutcome::Won(Mark::X));
        assert_eq!(summarize_outcome(&game, &report), "Alice wins (X)");
    }

    #[test]
    fn test_apply_moves_counts_rejections() {
        let mut game = Game::new();
        game.start_game("Alice", "Bob");

        // duplicate cell and an out-of-range index are recorded, not fatal
        let report = apply_moves(&mut game, &[4, 4, 9, 0]);
        assert_eq!(report.applied, 2);
        assert_eq!(report.rejected, 2);
        assert_eq!(report.outcome, TurnOutcome::Ongoing);
        assert_eq!(report.records[1].result, Err(TurnError::Occupied));
        assert_eq!(report.records[2].result, Err(TurnError::OutOfRange));
    }

    #[test]
    fn test_moves_after_the_end_are_rejected() {
        let mut game = Game::new();
        game.start_game("Alice", "Bob");

        let report = apply_moves(&mut game, &[0, 3, 1, 4, 2, 5]);
        assert_eq!(report.applied, 5);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.records[5].result, Err(TurnError::GameOver));
        assert_eq!(report.outcome, TurnOutcome::Won(Mark::X));
    }
}
