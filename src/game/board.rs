//! The 6 x 5 playing grid

use crate::core::{Feedback, Pattern, Word};

/// Number of guesses a player gets
pub const MAX_TURNS: usize = 6;

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Not guessed yet
    #[default]
    Empty,
    Filled { letter: u8, feedback: Feedback },
}

impl Cell {
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Filled { letter, .. } => Some(char::from(*letter)),
        }
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        match self {
            Self::Empty => None,
            Self::Filled { feedback, .. } => Some(*feedback),
        }
    }
}

/// Rows of cells; a row stays empty until its turn is played
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [[Cell; 5]; MAX_TURNS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rows(&self) -> &[[Cell; 5]; MAX_TURNS] {
        &self.rows
    }

    /// Write a scored guess into row `turn`
    ///
    /// # Panics
    /// Panics if `turn >= MAX_TURNS`
    pub(crate) fn fill_row(&mut self, turn: usize, guess: &Word, pattern: &Pattern) {
        for (cell, (&letter, &feedback)) in self.rows[turn]
            .iter_mut()
            .zip(guess.chars().iter().zip(pattern.feedback()))
        {
            *cell = Cell::Filled { letter, feedback };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.rows().iter().flatten().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn fill_row_only_touches_that_row() {
        let mut board = Board::new();
        let guess = Word::new("trace").unwrap();
        let pattern = Pattern::calculate(&guess, &Word::new("crane").unwrap());
        board.fill_row(2, &guess, &pattern);

        let row = &board.rows()[2];
        assert_eq!(row[0].letter(), Some('T'));
        assert_eq!(row[0].feedback(), Some(Feedback::Absent));
        assert_eq!(row[1].feedback(), Some(Feedback::Correct));
        assert_eq!(row[2].feedback(), Some(Feedback::Correct));
        assert_eq!(row[3].feedback(), Some(Feedback::Present));

        for (i, row) in board.rows().iter().enumerate() {
            if i != 2 {
                assert!(row.iter().all(|c| c.letter().is_none()));
            }
        }
    }
}
