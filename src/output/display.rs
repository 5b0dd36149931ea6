//! Screen rendering for the interactive session

use super::formatters::format_row;
use crate::game::{Game, GameStatus};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Prompt shown while waiting for a guess
pub const PROMPT: &str = ">";

/// Draw the board, an optional error line, and the prompt
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_turn<W: Write>(
    out: &mut W,
    game: &Game,
    error: Option<&str>,
    clear_screen: bool,
) -> io::Result<()> {
    if clear_screen {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    for row in game.board().rows() {
        writeln!(out, " {}", format_row(row))?;
    }

    if let Some(message) = error {
        writeln!(out, "{}", message.red())?;
    }

    // Only prompt while there is still something to guess
    if !game.is_complete() {
        write!(out, "{PROMPT}")?;
    }
    out.flush()
}

/// Print the result of a finished game and its shareable summary
///
/// Does nothing while the game is still in progress.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_outcome<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    match game.status() {
        GameStatus::InProgress => return Ok(()),
        GameStatus::Won => writeln!(out, "{}", "You won!".green().bold())?,
        GameStatus::Lost => {
            writeln!(out, "{}", "You lose!".red().bold())?;
            writeln!(out, "The answer was {}", game.answer().text().bold())?;
        }
    }

    if let Some(summary) = game.share_summary() {
        writeln!(out)?;
        writeln!(out, "{summary}")?;
    }
    out.flush()
}
