//! Termle
//!
//! Wordle in the terminal: daily or random puzzles, six guesses, and an
//! optional hard mode that forces every revealed hint to be reused.
//!
//! # Quick Start
//!
//! ```rust
//! use termle::core::Word;
//! use termle::game::{Game, GameConfig};
//! use termle::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(
//!     ["crane", "trace"].iter().map(|w| Word::new(w).unwrap()),
//! );
//! let mut game = Game::new(GameConfig {
//!     day: 0,
//!     hard_mode: false,
//!     dictionary: &dictionary,
//!     answer: Word::new("crane").unwrap(),
//! });
//!
//! let pattern = game.submit_guess("trace").unwrap();
//! println!("{pattern}");
//! assert!(game.submit_guess("crane").unwrap().is_perfect());
//! assert!(game.did_win());
//! ```

// Core domain types
pub mod core;

// Game rules and state
pub mod game;

// Word lists and day selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
