//! Game engine: board state, move validation, turn alternation.

use super::rules;
use super::types::{Board, Outcome, Player, Square};
use tracing::{debug, instrument};

/// Reason a move was not applied.
///
/// This never surfaces as an error from [`Game::apply_move`]; rejected
/// moves are no-ops. The reason is logged, and callers that want to
/// gate input ahead of time can ask [`Game::validate`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The index is outside the board (must be 0-8).
    #[display("index {_0} is out of bounds")]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("square {_0} is already occupied")]
    SquareOccupied(usize),

    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejected {}

/// Tic-tac-toe game engine.
///
/// Owns the complete game state: the board, the player to move, and
/// the outcome. Created in the initial state (empty board, X to move),
/// mutated only by [`Game::apply_move`], and returned wholesale to the
/// initial state by [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square at the given index (0-8).
    pub fn square(&self, index: usize) -> Option<Square> {
        self.board.get(index)
    }

    /// Returns the player to move.
    ///
    /// After a winning move this stays the winner; after a draw it
    /// stays whoever placed the last mark.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Checks whether a move at the given index would be accepted.
    pub fn validate(&self, index: usize) -> Result<(), MoveRejected> {
        if self.outcome != Outcome::InProgress {
            return Err(MoveRejected::GameOver);
        }
        if index >= 9 {
            return Err(MoveRejected::OutOfBounds(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveRejected::SquareOccupied(index));
        }
        Ok(())
    }

    /// Places the current player's mark at the given index (0-8).
    ///
    /// Invalid moves are no-ops: nothing changes when the game is over,
    /// the square is occupied, or the index is out of bounds. On a
    /// legal move the outcome is re-evaluated; the turn passes to the
    /// opponent only while the game remains in progress, so the mover
    /// is still `current_player` after a winning move.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(reason) = self.validate(index) {
            debug!(%reason, index, "move ignored");
            return;
        }

        self.board.set(index, Square::Occupied(self.current_player));
        self.outcome = rules::evaluate(&self.board);

        if self.outcome == Outcome::InProgress {
            self.current_player = self.current_player.opponent();
        }
    }

    /// Resets to the initial state: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_out_of_bounds() {
        let game = Game::new();
        assert_eq!(game.validate(9), Err(MoveRejected::OutOfBounds(9)));
    }

    #[test]
    fn test_validate_occupied() {
        let mut game = Game::new();
        game.apply_move(4);
        assert_eq!(game.validate(4), Err(MoveRejected::SquareOccupied(4)));
    }

    #[test]
    fn test_validate_game_over() {
        let mut game = Game::new();
        // X wins the top row
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index);
        }
        assert_eq!(game.outcome(), &Outcome::Win(Player::X));
        assert_eq!(game.validate(8), Err(MoveRejected::GameOver));
    }

    #[test]
    fn test_turn_alternation() {
        let mut game = Game::new();
        assert_eq!(game.current_player(), Player::X);
        game.apply_move(0);
        assert_eq!(game.current_player(), Player::O);
        game.apply_move(1);
        assert_eq!(game.current_player(), Player::X);
    }
}
