//! Interactive line-based game loop
//!
//! Reads one guess per line, redraws the board after every submission and
//! prints the outcome once the game is over.

use crate::game::{Game, GameStatus};
use crate::output::{render_outcome, render_turn};
use log::debug;
use std::io::{self, BufRead, Write};

/// Presentation settings for a session
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Clear the terminal before every redraw
    pub clear_screen: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game was won or lost
    Completed(GameStatus),
    /// Input ran out before the game finished
    EndOfInput,
}

/// Play `game` to completion, reading guesses from `input`
///
/// Rejected guesses are shown as an error under the board and do not use
/// a turn. The shareable summary is only printed for a finished game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    out: &mut W,
    options: PlayOptions,
) -> io::Result<SessionEnd> {
    render_turn(out, game, None, options.clear_screen)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            debug!("input closed on turn {}", game.current_turn());
            return Ok(SessionEnd::EndOfInput);
        }

        match game.submit_guess(&line) {
            Ok(pattern) => {
                debug!("turn {} scored {pattern}", game.current_turn());
                render_turn(out, game, None, options.clear_screen)?;
                if game.is_complete() {
                    render_outcome(out, game)?;
                    return Ok(SessionEnd::Completed(game.status()));
                }
            }
            Err(err) => {
                debug!("rejected guess {:?}: {err}", line.trim());
                render_turn(out, game, Some(&err.to_string()), options.clear_screen)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::output::PROMPT;
    use crate::wordlists::Dictionary;
    use std::io::Cursor;

    const OPTIONS: PlayOptions = PlayOptions {
        clear_screen: false,
    };

    fn dictionary() -> Dictionary {
        Dictionary::from_words(
            ["crane", "trace", "arose", "moist", "plumb", "dough", "spilt", "brine"]
                .iter()
                .map(|w| Word::new(w).unwrap()),
        )
    }

    fn play(answer: &str, hard_mode: bool, input: &str) -> (SessionEnd, String, usize) {
        colored::control::set_override(false);
        let dict = dictionary();
        let mut game = Game::new(GameConfig {
            day: 3,
            hard_mode,
            dictionary: &dict,
            answer: Word::new(answer).unwrap(),
        });
        let mut out = Vec::new();
        let end = run_play(&mut game, Cursor::new(input), &mut out, OPTIONS).unwrap();
        (end, String::from_utf8(out).unwrap(), game.current_turn())
    }

    #[test]
    fn winning_session_prints_summary() {
        let (end, out, turns) = play("crane", false, "arose\ncrane\n");

        assert_eq!(end, SessionEnd::Completed(GameStatus::Won));
        assert_eq!(turns, 2);
        assert!(out.contains("You won!"));
        assert!(out.contains("Termle 3 2/6"));
        assert!(out.contains("🟨🟩⬛⬛🟩\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn losing_session_reveals_answer() {
        let input = "moist\nplumb\ndough\nspilt\ntrace\nbrine\n";
        let (end, out, turns) = play("crane", false, input);

        assert_eq!(end, SessionEnd::Completed(GameStatus::Lost));
        assert_eq!(turns, 6);
        assert!(out.contains("You lose!"));
        assert!(out.contains("The answer was CRANE"));
        assert!(out.contains("Termle 3 X/6"));
    }

    #[test]
    fn rejected_input_is_reported_and_reprompted() {
        let (end, out, turns) = play("crane", false, "abc\nxyzzy\ncrane\n");

        assert_eq!(end, SessionEnd::Completed(GameStatus::Won));
        assert_eq!(turns, 1);
        assert!(out.contains("Please enter a 5 letter word"));
        assert!(out.contains("Not in word list: XYZZY"));
        // Initial prompt plus one after each rejection
        assert_eq!(out.matches(PROMPT).count(), 3);
    }

    #[test]
    fn hard_mode_rejection_is_reported() {
        let (_, out, turns) = play("crane", true, "arose\nbrine\n");

        assert!(out.contains("Guess must contain A"));
        assert_eq!(turns, 1);
    }

    #[test]
    fn end_of_input_skips_summary() {
        let (end, out, turns) = play("crane", false, "trace\n");

        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(turns, 1);
        assert!(!out.contains("Termle"));
        assert!(!out.contains("You"));
    }

    #[test]
    fn input_after_game_over_is_not_read() {
        let (end, _, turns) = play("crane", false, "crane\ntrace\n");

        assert_eq!(end, SessionEnd::Completed(GameStatus::Won));
        assert_eq!(turns, 1);
    }

    #[test]
    fn clear_screen_emits_escape() {
        colored::control::set_override(false);
        let dict = dictionary();
        let mut game = Game::new(GameConfig {
            day: 0,
            hard_mode: false,
            dictionary: &dict,
            answer: Word::new("crane").unwrap(),
        });
        let mut out = Vec::new();
        run_play(
            &mut game,
            Cursor::new(""),
            &mut out,
            PlayOptions { clear_screen: true },
        )
        .unwrap();

        assert!(String::from_utf8(out).unwrap().starts_with("\u{1b}[2J"));
    }
}
