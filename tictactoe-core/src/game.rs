//! Game session state and turn sequencing

use crate::board::{Board, Mark, WIN_LINES};
use serde::{Deserialize, Serialize};

/// Placeholder names shown before the first start
const DEFAULT_NAME_X: &str = "Player X";
const DEFAULT_NAME_O: &str = "Player O";

/// A player record: display name plus fixed mark
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    fn new(name: &str, mark: Mark) -> Self {
        Self {
            name: name.to_string(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Why a turn was rejected. Serialized reasons use kebab-case
/// (`not-started`, `game-over`, `occupied`, `out-of-range`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TurnError {
    /// No game has been started yet
    #[error("game has not been started")]
    NotStarted,
    /// The game already ended in a win or draw
    #[error("game is already over")]
    GameOver,
    /// The target cell already holds a mark
    #[error("cell is already occupied")]
    Occupied,
    /// The index does not address a cell on the board
    #[error("cell index out of range")]
    OutOfRange,
}

/// Result of a successfully applied turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TurnOutcome {
    /// The placed mark completed a winning line
    Won(Mark),
    /// The board filled with no winner
    Draw,
    /// Play continues with the other player
    Ongoing,
}

impl TurnOutcome {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            TurnOutcome::Won(mark) => Some(*mark),
            _ => None,
        }
    }

    /// True when the turn ended the game
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnOutcome::Ongoing)
    }
}

/// Game session: board, players, turn order, lifecycle flags.
///
/// One session covers a `start_game` call and any number of `reset_game`
/// rounds after it; player identities persist across rounds.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    /// Index of the player to move (0 = X, 1 = O)
    current: usize,
    started: bool,
    over: bool,
}

impl Game {
    /// Create a not-started session with placeholder player names
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(DEFAULT_NAME_X, Mark::X),
                Player::new(DEFAULT_NAME_O, Mark::O),
            ],
            current: 0,
            started: false,
            over: false,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The board, read-only
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both player records, X first
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player to move
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Start the session with fresh player names.
    ///
    /// Both names are trimmed, the board resets, and X moves first. Calling
    /// this again renames the players and restarts.
    pub fn start_game(&mut self, name_x: &str, name_o: &str) {
        self.players[0].name = name_x.trim().to_string();
        self.players[1].name = name_o.trim().to_string();
        self.board.reset();
        self.current = 0;
        self.over = false;
        self.started = true;
    }

    /// Clear the board for another round.
    ///
    /// Player names survive and the session stays started.
    pub fn reset_game(&mut self) {
        self.over = false;
        self.board.reset();
        self.current = 0;
    }

    // ========================================================================
    // TURNS
    // ========================================================================

    /// Place the current player's mark at `index`.
    ///
    /// Every rejection leaves the board, the turn order, and the lifecycle
    /// flags untouched.
    pub fn play_turn(&mut self, index: usize) -> Result<TurnOutcome, TurnError> {
        if !self.started {
            return Err(TurnError::NotStarted);
        }
        if self.over {
            return Err(TurnError::GameOver);
        }
        if !Board::in_bounds(index) {
            return Err(TurnError::OutOfRange);
        }

        let mark = self.players[self.current].mark;
        if !self.board.set_mark(index, mark) {
            return Err(TurnError::Occupied);
        }

        if let Some(winner) = self.winner() {
            self.over = true;
            return Ok(TurnOutcome::Won(winner));
        }
        if self.board.is_full() {
            self.over = true;
            return Ok(TurnOutcome::Draw);
        }

        self.current = 1 - self.current;
        Ok(TurnOutcome::Ongoing)
    }

    /// Mark holding a complete line, if any.
    ///
    /// At most one mark can win: a win is checked right after each placement,
    /// so the board held no complete line before the freshest mark.
    fn winner(&self) -> Option<Mark> {
        for [a, b, c] in WIN_LINES {
            if let Some(mark) = self.board.cell(a) {
                if self.board.cell(b) == Some(mark) && self.board.cell(c) == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
