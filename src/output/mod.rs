//! Terminal output formatting
//!
//! Colored board rendering and end-of-game messages.

pub mod display;
pub mod formatters;

pub use display::{PROMPT, render_outcome, render_turn};
