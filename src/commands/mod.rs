//! Command implementations

pub mod play;

pub use play::{PlayOptions, SessionEnd, run_play};
