//! Core domain types for Termle
//!
//! Words and guess evaluation. Everything here is pure and has no I/O.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};
