//! The decoding board
//!
//! Holds the secret code and the guess log, and answers guesses with feedback.

mod decoding;
mod oracle;

pub use decoding::{Board, DEFAULT_MAX_GUESSES};
pub use oracle::Oracle;
