//! Game state machine
//!
//! Sequences validation, scoring and hint tracking for one session, and
//! decides when the game is won or lost.

use super::board::{Board, MAX_TURNS};
use super::{GuessError, Hints};
use crate::core::{Pattern, Word};
use crate::wordlists::Dictionary;

/// Everything needed to start a game
#[derive(Debug, Clone, Copy)]
pub struct GameConfig<'a> {
    pub day: usize,
    pub hard_mode: bool,
    pub dictionary: &'a Dictionary,
    pub answer: Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A single game of Termle
#[derive(Debug, Clone)]
pub struct Game<'a> {
    day: usize,
    current_turn: usize,
    turns_remaining: usize,
    status: GameStatus,
    hard_mode: bool,
    answer: Word,
    dictionary: &'a Dictionary,
    hints: Hints,
    board: Board,
    guesses: Vec<(Word, Pattern)>,
}

impl<'a> Game<'a> {
    #[must_use]
    pub fn new(config: GameConfig<'a>) -> Self {
        Self {
            day: config.day,
            current_turn: 0,
            turns_remaining: MAX_TURNS,
            status: GameStatus::InProgress,
            hard_mode: config.hard_mode,
            answer: config.answer,
            dictionary: config.dictionary,
            hints: Hints::new(),
            board: Board::new(),
            guesses: Vec::with_capacity(MAX_TURNS),
        }
    }

    /// Submit one raw line of player input
    ///
    /// On success the guess is scored, written to the board and the turn
    /// advances. A rejected guess leaves the game untouched.
    ///
    /// # Errors
    /// - `GameOver` if the game has already ended
    /// - `InvalidFormat` unless the input is exactly 5 letters
    /// - `NotInDictionary` if the word is not an accepted guess
    /// - `MissingRequiredLetter` / `WrongFixedPosition` in hard mode when the
    ///   guess ignores a revealed hint
    pub fn submit_guess(&mut self, raw: &str) -> Result<Pattern, GuessError> {
        if self.is_complete() {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(raw).map_err(|_| GuessError::InvalidFormat)?;

        if !self.dictionary.contains(&guess) {
            return Err(GuessError::NotInDictionary(guess));
        }

        // Hints only cover earlier turns at this point
        if self.hard_mode {
            self.hints.validate(&guess)?;
        }

        let pattern = Pattern::calculate(&guess, &self.answer);
        self.board.fill_row(self.current_turn, &guess, &pattern);
        self.hints.record(&guess, &pattern);
        self.guesses.push((guess, pattern));

        self.turns_remaining -= 1;
        self.current_turn += 1;

        if pattern.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.turns_remaining == 0 {
            self.status = GameStatus::Lost;
        }

        Ok(pattern)
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[inline]
    #[must_use]
    pub fn did_win(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub const fn current_turn(&self) -> usize {
        self.current_turn
    }

    #[must_use]
    pub const fn turns_remaining(&self) -> usize {
        self.turns_remaining
    }

    #[must_use]
    pub const fn is_hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn hints(&self) -> &Hints {
        &self.hints
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[(Word, Pattern)] {
        &self.guesses
    }

    /// Spoiler-free result grid for pasting elsewhere
    ///
    /// Returns `None` while the game is still being played.
    ///
    /// ```text
    /// Termle 42 3/6*
    ///
    /// 🟨🟩⬛⬛🟩
    /// 🟩🟩⬛🟩🟩
    /// 🟩🟩🟩🟩🟩
    /// ```
    #[must_use]
    pub fn share_summary(&self) -> Option<String> {
        let score = match self.status {
            GameStatus::InProgress => return None,
            GameStatus::Won => self.current_turn.to_string(),
            GameStatus::Lost => "X".to_string(),
        };
        let hard = if self.hard_mode { "*" } else { "" };

        let mut summary = format!("Termle {} {score}/{MAX_TURNS}{hard}\n", self.day);
        for (_, pattern) in &self.guesses {
            summary.push('\n');
            summary.push_str(&pattern.to_emoji());
        }
        Some(summary)
    }
}
