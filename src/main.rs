//! Termle - CLI
//!
//! Play the daily puzzle, a specific day, or a random one.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};
use termle::{
    commands::{PlayOptions, run_play},
    game::{Game, GameConfig},
    wordlists::{
        AnswerList, AnswerSource, DayChoice, Dictionary, FixedWidthAnswers, today_utc,
    },
};

#[derive(Parser)]
#[command(
    name = "termle",
    about = "Wordle in your terminal",
    version,
    author
)]
struct Cli {
    /// Play a specific puzzle number (day 0 is 2021-06-19)
    #[arg(short, long)]
    day: Option<usize>,

    /// Play a random puzzle (overrides --day)
    #[arg(short, long)]
    random: bool,

    /// Hard mode: revealed hints must be used in subsequent guesses
    #[arg(long)]
    hard: bool,

    /// Newline-delimited list of accepted guesses [default: built-in list]
    #[arg(long, env = "TERMLE_GUESSES")]
    guesses: Option<PathBuf>,

    /// List of answers, one per day [default: built-in list]
    #[arg(long, env = "TERMLE_ANSWERS")]
    answers: Option<PathBuf>,

    /// Encoding of the answers file
    #[arg(long, value_enum, default_value_t = AnswerFormat::Lines)]
    answer_format: AnswerFormat,

    /// Do not clear the screen between turns
    #[arg(long)]
    no_clear: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AnswerFormat {
    /// One answer per line
    Lines,
    /// 7-byte records read by seeking
    FixedWidth,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::load(path)
            .with_context(|| format!("failed to load dictionary from {}", path.display())),
        None => Dictionary::embedded().context("built-in dictionary is malformed"),
    }
}

fn load_answers(path: Option<&Path>, format: AnswerFormat) -> Result<Box<dyn AnswerSource>> {
    let Some(path) = path else {
        return Ok(Box::new(
            AnswerList::embedded().context("built-in answer list is malformed")?,
        ));
    };

    let source: Box<dyn AnswerSource> = match format {
        AnswerFormat::Lines => Box::new(AnswerList::load(path)?),
        AnswerFormat::FixedWidth => Box::new(FixedWidthAnswers::open(path)?),
    };
    Ok(source)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(cli.guesses.as_deref())?;
    debug!("loaded {} accepted guesses", dictionary.len());

    let mut answers = load_answers(cli.answers.as_deref(), cli.answer_format).with_context(|| {
        let path = cli.answers.as_deref().unwrap_or_else(|| Path::new("<built-in>"));
        format!("failed to load answers from {}", path.display())
    })?;
    debug!("loaded {} answers", answers.len());

    let choice = DayChoice::from_flags(cli.random, cli.day);
    let day = choice.resolve(today_utc(), answers.len(), &mut rand::rng());
    debug!("playing day {day} ({choice:?})");
    if day >= answers.len() {
        warn!(
            "day {day} is past the last of {} answers, wrapping around",
            answers.len()
        );
    }

    let answer = answers
        .answer_for_puzzle(day)
        .with_context(|| format!("failed to pick the answer for day {day}"))?;

    let mut game = Game::new(GameConfig {
        day,
        hard_mode: cli.hard,
        dictionary: &dictionary,
        answer,
    });

    let options = PlayOptions {
        clear_screen: !cli.no_clear,
    };
    let end = run_play(&mut game, io::stdin().lock(), &mut io::stdout().lock(), options)
        .context("terminal I/O failed")?;
    debug!("session ended: {end:?}");

    Ok(())
}
