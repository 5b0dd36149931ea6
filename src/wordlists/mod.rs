//! Word lists and day selection
//!
//! Default lists are compiled into the binary from `data/`; files given on
//! the command line replace them at startup.

pub mod day;
mod embedded;
pub mod loader;

pub use day::{DayChoice, FIRST_DAY, day_for_date, today_utc};
pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};
pub use loader::{AnswerList, AnswerSource, Dictionary, FixedWidthAnswers, LoadError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(GUESSES) {
            assert!(Word::new(word).is_ok(), "{word:?} is not a valid word");
        }
    }

    #[test]
    fn answers_subset_of_guesses() {
        let dictionary = Dictionary::embedded().unwrap();

        for &answer in ANSWERS {
            assert!(
                dictionary.contains(&Word::new(answer).unwrap()),
                "Answer '{answer}' not in guess list"
            );
        }
    }

    #[test]
    fn embedded_answers_follow_file_order() {
        let mut answers = AnswerList::embedded().unwrap();
        assert_eq!(answers.len(), ANSWERS_COUNT);
        assert_eq!(answers.answer_for_day(0).unwrap(), Word::new(ANSWERS[0]).unwrap());
    }

    #[test]
    fn embedded_guesses_have_no_duplicates() {
        assert_eq!(Dictionary::embedded().unwrap().len(), GUESSES_COUNT);
    }
}
