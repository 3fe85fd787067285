//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with no solver logic.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;

pub use code::{CODE_LENGTH, Code, CodeError, NUM_COLORS};
pub use feedback::Feedback;
