//! Guess evaluation and feedback patterns
//!
//! Each guessed letter gets one of three marks:
//! - Absent (letter not in the answer, or all its copies already accounted for)
//! - Present (letter in the answer, wrong position)
//! - Correct (letter in the correct position)

use super::Word;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    #[default]
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Square glyph used in the shareable summary
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬛',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback pattern for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern([Feedback; 5]);

impl Pattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; 5]);

    #[inline]
    #[must_use]
    pub const fn new(feedback: [Feedback; 5]) -> Self {
        Self(feedback)
    }

    /// Get the per-position marks
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; 5] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements Wordle's feedback rules including duplicate letters: a letter
    /// is never marked more times than it occurs in the answer, and exact
    /// matches claim their copies before misplaced ones.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark misplaced letters while the pool still has copies
    ///
    /// # Examples
    /// ```
    /// use termle::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern[0], Feedback::Absent);
    /// assert_eq!(pattern[1], Feedback::Correct);
    /// assert_eq!(pattern[2], Feedback::Correct);
    /// assert_eq!(pattern[3], Feedback::Present);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Absent; 5];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (i, (g, a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Feedback::Correct;
                if let Some(count) = answer_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but copies of the letter remain
        for (i, letter) in guess.chars().iter().enumerate() {
            if result[i] == Feedback::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(letter)
                && *count > 0
            {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use termle::core::Pattern;
    ///
    /// let p: Pattern = "GY-GY".parse().unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬛🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl Index<usize> for Pattern {
    type Output = Feedback;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

/// Parse a pattern from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
///
/// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for present and
/// '-'/'_'/⬛/⬜ for absent.
impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = [Feedback::Absent; 5];
        let mut chars = s.chars();

        for slot in &mut result {
            *slot = match chars.next() {
                Some('G' | 'g' | '🟩') => Feedback::Correct,
                Some('Y' | 'y' | '🟨') => Feedback::Present,
                Some('-' | '_' | '⬛' | '⬜') => Feedback::Absent,
                _ => return Err(format!("Invalid pattern string: {s}")),
            };
        }

        if chars.next().is_some() {
            return Err(format!("Invalid pattern string: {s}"));
        }

        Ok(Self(result))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
