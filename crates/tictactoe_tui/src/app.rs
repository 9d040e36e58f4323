//! Application state and logic.

use tictactoe_core::{Game, Outcome, Position};
use tracing::debug;

/// Main application state: the game engine plus a derived status line.
pub struct App {
    game: Game,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        let game = Game::new();
        let status_message = turn_message(&game);
        Self {
            game,
            status_message,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Places the current player's mark at the given position.
    ///
    /// Invalid moves (occupied square, game over) have no visible
    /// effect; the engine drops them silently.
    pub fn make_move(&mut self, position: Position) {
        debug!(%position, "making move");
        self.game.apply_move(position.to_index());
        self.status_message = turn_message(&self.game);
    }

    /// Resets the game to its initial state.
    pub fn reset(&mut self) {
        debug!("resetting game");
        self.game.reset();
        self.status_message = turn_message(&self.game);
    }
}

fn turn_message(game: &Game) -> String {
    match game.outcome() {
        Outcome::InProgress => format!("Player {}'s turn", game.current_player()),
        Outcome::Win(player) => format!("Winner: {player}"),
        Outcome::Draw => "Game ended in a draw".to_string(),
    }
}
