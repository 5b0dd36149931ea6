//! Word list loading
//!
//! The dictionary is a newline-delimited list of accepted guesses. Answers
//! come either from a newline-delimited list (day N is the Nth word) or from
//! a fixed-width file of 7-byte records that is read by seeking. Both have
//! built-in defaults compiled from `data/`.

use super::embedded::{ANSWERS, GUESSES};
use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bytes per record in a fixed-width answer file: 5 letters plus "\r\n"
pub const RECORD_LEN: u64 = 7;

/// Startup failure while loading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read word list")]
    Read(#[from] io::Error),
    #[error("invalid word {entry:?} on line {line}")]
    InvalidEntry {
        line: usize,
        entry: String,
        #[source]
        source: WordError,
    },
    #[error("word list is empty")]
    Empty,
    #[error("no answer for day {day}, only {len} answers are known")]
    DayOutOfRange { day: usize, len: usize },
}

/// Read one word per line, skipping blank lines
///
/// # Errors
///
/// Returns `LoadError::Read` on I/O failure and `LoadError::InvalidEntry`
/// for the first line that is not a 5-letter word.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| LoadError::InvalidEntry {
            line: i + 1,
            entry: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    Ok(words)
}

/// Validate an in-memory list, numbering entries from 1 like file lines
///
/// # Errors
///
/// Returns `LoadError::InvalidEntry` for the first entry that is not a
/// 5-letter word.
pub fn parse_words(entries: &[&str]) -> Result<Vec<Word>, LoadError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Word::new(entry).map_err(|source| LoadError::InvalidEntry {
                line: i + 1,
                entry: (*entry).to_string(),
                source,
            })
        })
        .collect()
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Set of accepted guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from already validated words
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Parse a newline-delimited dictionary
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, malformed entries, or when no words are found.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let words = read_words(reader)?;
        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self::from_words(words))
    }

    /// Load a dictionary file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or parsed.
    ///
    /// # Examples
    /// ```no_run
    /// use termle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::load("data/guesses.txt").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::from_reader(BufReader::new(open(path.as_ref())?))
    }

    /// The built-in guess list
    ///
    /// # Errors
    ///
    /// Fails only if the compiled-in list holds a malformed entry.
    pub fn embedded() -> Result<Self, LoadError> {
        Ok(Self::from_words(parse_words(GUESSES)?))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Day-indexed list of answers
pub trait AnswerSource {
    /// Number of known answers
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Answer for a 0-based day number
    ///
    /// # Errors
    ///
    /// Returns `LoadError::DayOutOfRange` past the end of the list, or a
    /// read/parse error for file-backed sources.
    fn answer_for_day(&mut self, day: usize) -> Result<Word, LoadError>;

    /// Answer for a puzzle number, wrapping around once the list runs out
    ///
    /// # Errors
    ///
    /// Same as [`AnswerSource::answer_for_day`], except that a day past the
    /// end is never out of range.
    fn answer_for_puzzle(&mut self, day: usize) -> Result<Word, LoadError> {
        let len = self.len();
        if len == 0 {
            return Err(LoadError::Empty);
        }
        self.answer_for_day(day % len)
    }
}

/// Answers held in memory, one per non-blank line of the source
#[derive(Debug, Clone)]
pub struct AnswerList {
    words: Vec<Word>,
}

impl AnswerList {
    /// Wrap a list of answers in day order
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` for an empty list.
    pub fn new(words: Vec<Word>) -> Result<Self, LoadError> {
        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { words })
    }

    /// Parse a newline-delimited answer list
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, malformed entries, or an empty list.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        Self::new(read_words(reader)?)
    }

    /// Load an answer list file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::from_reader(BufReader::new(open(path.as_ref())?))
    }

    /// The built-in answer list
    ///
    /// # Errors
    ///
    /// Fails only if the compiled-in list is malformed or empty.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::new(parse_words(ANSWERS)?)
    }
}

impl AnswerSource for AnswerList {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn answer_for_day(&mut self, day: usize) -> Result<Word, LoadError> {
        self.words
            .get(day)
            .copied()
            .ok_or(LoadError::DayOutOfRange {
                day,
                len: self.words.len(),
            })
    }
}

/// Answers read on demand from fixed-width records
///
/// Record N starts at byte `N * 7`; only its first 5 bytes are read.
#[derive(Debug)]
pub struct FixedWidthAnswers<R> {
    reader: R,
    len: usize,
}

impl<R: Read + Seek> FixedWidthAnswers<R> {
    /// Wrap a seekable reader
    ///
    /// A missing delimiter after the final record is tolerated.
    ///
    /// # Errors
    ///
    /// Fails if the reader cannot seek or holds no complete record.
    pub fn new(mut reader: R) -> Result<Self, LoadError> {
        let bytes = reader.seek(SeekFrom::End(0))?;
        let len = ((bytes + 2) / RECORD_LEN) as usize;
        if len == 0 {
            return Err(LoadError::Empty);
        }
        Ok(Self { reader, len })
    }
}

impl FixedWidthAnswers<BufReader<File>> {
    /// # Errors
    ///
    /// Fails if the file cannot be opened or is empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::new(BufReader::new(open(path.as_ref())?))
    }
}

impl<R: Read + Seek> AnswerSource for FixedWidthAnswers<R> {
    fn len(&self) -> usize {
        self.len
    }

    fn answer_for_day(&mut self, day: usize) -> Result<Word, LoadError> {
        if day >= self.len {
            return Err(LoadError::DayOutOfRange { day, len: self.len });
        }

        self.reader.seek(SeekFrom::Start(day as u64 * RECORD_LEN))?;
        let mut record = [0u8; 5];
        self.reader.read_exact(&mut record)?;

        let entry = String::from_utf8_lossy(&record);
        Word::new(&entry).map_err(|source| LoadError::InvalidEntry {
            line: day + 1,
            entry: entry.into_owned(),
            source,
        })
    }
}
