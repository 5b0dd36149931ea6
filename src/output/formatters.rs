//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::game::Cell;
use colored::{ColoredString, Colorize};

/// Render one board cell as a colored ` X ` block
///
/// Unrevealed cells show `_` on a white background.
#[must_use]
pub fn format_cell(cell: &Cell) -> ColoredString {
    match *cell {
        Cell::Empty => " _ ".black().on_bright_white(),
        Cell::Filled { letter, feedback } => {
            let text = format!(" {} ", char::from(letter)).bright_white().bold();
            match feedback {
                Feedback::Correct => text.on_green(),
                Feedback::Present => text.on_yellow(),
                Feedback::Absent => text.on_bright_black(),
            }
        }
    }
}

/// Render a board row as space-separated cells
#[must_use]
pub fn format_row(row: &[Cell]) -> String {
    row.iter()
        .map(|cell| format_cell(cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_carry_their_letter() {
        let cell = Cell::Filled {
            letter: b'Q',
            feedback: Feedback::Present,
        };
        assert_eq!(format_cell(&cell).input, " Q ");
        assert_eq!(format_cell(&Cell::Empty).input, " _ ");
    }

    #[test]
    fn feedback_picks_background() {
        let cell = |feedback| Cell::Filled {
            letter: b'A',
            feedback,
        };
        assert_eq!(
            format_cell(&cell(Feedback::Correct)).bgcolor,
            Some(colored::Color::Green)
        );
        assert_eq!(
            format_cell(&cell(Feedback::Present)).bgcolor,
            Some(colored::Color::Yellow)
        );
        assert_eq!(
            format_cell(&cell(Feedback::Absent)).bgcolor,
            Some(colored::Color::BrightBlack)
        );
        assert_eq!(
            format_cell(&Cell::Empty).bgcolor,
            Some(colored::Color::BrightWhite)
        );
    }

    #[test]
    fn row_has_every_cell() {
        colored::control::set_override(false);
        let row = [Cell::Empty; 5];
        assert_eq!(format_row(&row), " _   _   _   _   _ ");
    }
}
