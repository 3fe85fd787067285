//! The interface a codebreaker plays against

use crate::core::{Code, Feedback};

/// Something that knows the secret code and answers guesses
pub trait Oracle {
    /// Submit a guess and get its feedback
    ///
    /// Returns `None` without recording anything if the code is already
    /// broken or the guess budget is used up.
    fn submit(&mut self, guess: Code) -> Option<Feedback>;

    /// Whether a guess has produced a full match
    fn is_solved(&self) -> bool;

    /// Number of guesses recorded so far
    fn guesses_taken(&self) -> usize;

    /// Maximum number of guesses allowed
    fn max_guesses(&self) -> usize;
}
