//! Pure tic-tac-toe game logic.
//!
//! The engine is a plain value with no I/O: a presentation layer owns a
//! [`Game`], calls [`Game::apply_move`] on user input and [`Game::reset`]
//! on request, and reads state back through the accessors to render.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! game.apply_move(4);
//! assert_eq!(game.current_player(), Player::O);
//! assert_eq!(game.outcome(), &Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod position;
pub mod rules;
mod types;

pub use engine::{Game, MoveRejected};
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};
