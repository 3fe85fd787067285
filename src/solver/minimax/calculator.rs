//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, Feedback};

/// Count how many candidates would produce each feedback value for `guess`
///
/// Entry `i` is the number of candidates `c` with
/// `Feedback::calculate(c, guess) == Feedback::ALL[i]`, which is exactly how
/// many candidates would remain if that feedback were observed.
#[must_use]
pub fn partition_sizes(guess: &Code, candidates: &[Code]) -> [usize; Feedback::COUNT] {
    let mut counts = [0usize; Feedback::COUNT];

    for candidate in candidates {
        counts[Feedback::calculate(candidate, guess).index()] += 1;
    }

    counts
}

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each of the 14 possible feedback values:
/// - Count how many candidates would still be possible after seeing it
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::new("1122").unwrap();
/// let candidates = Code::all();
///
/// // Knuth's opener leaves at most 256 codes
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 256);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    partition_sizes(guess, candidates)
        .into_iter()
        .max()
        .unwrap_or(0)
}
