//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and tests can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::types::{Board, Outcome};

/// Evaluates a board: win if any line is complete, draw if the board
/// is full with no winner, otherwise still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
