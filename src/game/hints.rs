//! Accumulated hard-mode constraints
//!
//! Tracks letters known to be in the answer (present) and letters known
//! to sit at a given position (correct).

use super::GuessError;
use crate::core::{Feedback, Pattern, Word};
use std::collections::BTreeSet;

/// Constraints derived from every guess accepted so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    yellow: BTreeSet<u8>,
    green: [Option<u8>; 5],
}

impl Hints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters confirmed somewhere in the answer, alphabetically
    pub fn yellow_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.yellow.iter().map(|&c| char::from(c))
    }

    /// Letters confirmed at each position
    #[must_use]
    pub const fn green_letters(&self) -> &[Option<u8>; 5] {
        &self.green
    }

    /// Fold a scored guess into the hints
    ///
    /// Only the true answer letter can be marked correct, so rewriting a
    /// green slot always writes the same letter.
    pub fn record(&mut self, guess: &Word, pattern: &Pattern) {
        for (i, (&letter, feedback)) in guess.chars().iter().zip(pattern.feedback()).enumerate() {
            match feedback {
                Feedback::Correct => self.green[i] = Some(letter),
                Feedback::Present => {
                    self.yellow.insert(letter);
                }
                Feedback::Absent => {}
            }
        }
    }

    /// Check that `candidate` uses every revealed hint
    ///
    /// # Errors
    /// - `MissingRequiredLetter` if a present letter is missing from the candidate
    /// - `WrongFixedPosition` if a correct letter is not repeated at its position
    pub fn validate(&self, candidate: &Word) -> Result<(), GuessError> {
        if let Some(&letter) = self.yellow.iter().find(|&&c| !candidate.has_letter(c)) {
            return Err(GuessError::MissingRequiredLetter(char::from(letter)));
        }

        for (position, required) in self.green.iter().enumerate() {
            if let Some(letter) = *required
                && candidate.char_at(position) != letter
            {
                return Err(GuessError::WrongFixedPosition {
                    position,
                    letter: char::from(letter),
                });
            }
        }

        Ok(())
    }
}
