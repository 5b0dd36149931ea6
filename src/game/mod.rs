//! Game rules: turn sequencing, hint tracking and the board

mod board;
mod error;
mod hints;
mod state;

pub use board::{Board, Cell, MAX_TURNS};
pub use error::GuessError;
pub use hints::Hints;
pub use state::{Game, GameConfig, GameStatus};
