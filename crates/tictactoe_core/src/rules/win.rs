//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: rows, columns, diagonals, in that fixed order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Lines are checked in the fixed order of
/// [`LINES`] and the first complete line wins.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Some(Square::Occupied(player)) => Some(player),
                _ => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X));
        board.set(1, Square::Occupied(Player::X));
        board.set(2, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.set(1, Square::Occupied(Player::O));
        board.set(4, Square::Occupied(Player::O));
        board.set(7, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::O));
        board.set(4, Square::Occupied(Player::O));
        board.set(8, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X));
        board.set(1, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_no_winner() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X));
        board.set(1, Square::Occupied(Player::O));
        board.set(2, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }
}
