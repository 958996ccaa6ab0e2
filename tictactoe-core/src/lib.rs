//! Tic-tac-toe engine
//!
//! This crate provides the game rules only:
//! - 3x3 board with write-once cells
//! - Turn-ordered session state with win/draw detection
//! - Typed rejection reasons for invalid turns
//!
//! Rendering and input handling live in the frontend crate; everything here
//! is synchronous, in-memory, and free of I/O.

pub mod board;
pub mod game;

// Re-exports for convenient access
pub use board::{Board, Cell, Mark, CELL_COUNT, WIN_LINES};
pub use game::{Game, Player, TurnError, TurnOutcome};
