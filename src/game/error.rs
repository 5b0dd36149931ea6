//! In-game rejections
//!
//! None of these consume a turn; the player simply enters another guess.

use crate::core::Word;
use thiserror::Error;

/// Why a submitted guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a 5 letter word")]
    InvalidFormat,
    #[error("Not in word list: {0}")]
    NotInDictionary(Word),
    #[error("Guess must contain {0}")]
    MissingRequiredLetter(char),
    #[error("{} letter must be {letter}", ordinal(*position))]
    WrongFixedPosition { position: usize, letter: char },
    #[error("The game is already over")]
    GameOver,
}

/// 0-based position to "1st", "2nd", ...
fn ordinal(position: usize) -> String {
    let n = position + 1;
    let suffix = match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GuessError::InvalidFormat.to_string(),
            "Please enter a 5 letter word"
        );
        assert_eq!(
            GuessError::NotInDictionary(Word::new("xyzzy").unwrap()).to_string(),
            "Not in word list: XYZZY"
        );
        assert_eq!(
            GuessError::MissingRequiredLetter('R').to_string(),
            "Guess must contain R"
        );
        assert_eq!(
            GuessError::WrongFixedPosition {
                position: 1,
                letter: 'R'
            }
            .to_string(),
            "2nd letter must be R"
        );
        assert_eq!(
            GuessError::WrongFixedPosition {
                position: 4,
                letter: 'E'
            }
            .to_string(),
            "5th letter must be E"
        );
    }
}
