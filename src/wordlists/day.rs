//! Puzzle numbering
//!
//! Day 0 is 2021-06-19 (UTC). Each following calendar day is the next puzzle.

use chrono::{NaiveDate, Utc};
use rand::Rng;

/// Date of puzzle 0
pub const FIRST_DAY: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("invalid first day"),
};

/// Whole days between `FIRST_DAY` and `date`, clamped at 0
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use termle::wordlists::day_for_date;
///
/// let date = NaiveDate::from_ymd_opt(2021, 6, 20).unwrap();
/// assert_eq!(day_for_date(date), 1);
/// ```
#[must_use]
pub fn day_for_date(date: NaiveDate) -> usize {
    let days = date.signed_duration_since(FIRST_DAY).num_days();
    usize::try_from(days).unwrap_or(0)
}

/// Today's date by the UTC calendar
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// How the puzzle for a session is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayChoice {
    /// The puzzle for today's date
    Today,
    /// An explicit puzzle number
    Fixed(usize),
    /// Uniformly random among the known answers
    Random,
}

impl DayChoice {
    /// Build from command-line flags; `--random` wins over `--day`
    #[must_use]
    pub const fn from_flags(random: bool, day: Option<usize>) -> Self {
        match (random, day) {
            (true, _) => Self::Random,
            (false, Some(day)) => Self::Fixed(day),
            (false, None) => Self::Today,
        }
    }

    /// Resolve to a day number
    ///
    /// `total` is the number of known answers and bounds random picks.
    pub fn resolve<R: Rng>(self, today: NaiveDate, total: usize, rng: &mut R) -> usize {
        match self {
            Self::Today => day_for_date(today),
            Self::Fixed(day) => day,
            Self::Random => rng.random_range(0..total.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_day_is_day_zero() {
        assert_eq!(day_for_date(FIRST_DAY), 0);
    }

    #[test]
    fn next_day_is_day_one() {
        assert_eq!(day_for_date(date(2021, 6, 20)), 1);
    }

    #[test]
    fn day_counts_across_years() {
        assert_eq!(day_for_date(date(2022, 6, 19)), 365);
        // 2024 is a leap year
        assert_eq!(day_for_date(date(2024, 6, 19)), 365 * 3 + 1);
    }

    #[test]
    fn dates_before_first_day_clamp_to_zero() {
        assert_eq!(day_for_date(date(2021, 1, 1)), 0);
    }

    #[test]
    fn flags_pick_choice() {
        assert_eq!(DayChoice::from_flags(false, None), DayChoice::Today);
        assert_eq!(DayChoice::from_flags(false, Some(12)), DayChoice::Fixed(12));
        assert_eq!(DayChoice::from_flags(true, Some(12)), DayChoice::Random);
        assert_eq!(DayChoice::from_flags(true, None), DayChoice::Random);
    }

    #[test]
    fn resolve_today_and_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        let today = date(2021, 6, 29);
        assert_eq!(DayChoice::Today.resolve(today, 100, &mut rng), 10);
        assert_eq!(DayChoice::Fixed(3).resolve(today, 100, &mut rng), 3);
    }

    #[test]
    fn random_day_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let day = DayChoice::Random.resolve(FIRST_DAY, 5, &mut rng);
            assert!(day < 5);
        }
    }

    #[test]
    fn random_day_with_single_answer() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(DayChoice::Random.resolve(FIRST_DAY, 1, &mut rng), 0);
    }
}
