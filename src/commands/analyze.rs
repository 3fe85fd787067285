//! Guess analysis command
//!
//! Shows how a single guess partitions a set of candidate codes.

use crate::core::{Code, Feedback};
use crate::solver::minimax::partition_sizes;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    /// Non-empty partitions, in `Feedback::ALL` order
    pub partitions: Vec<(Feedback, usize)>,
    /// Minimax score: the largest partition
    pub max_remaining: usize,
    /// Average partition size, weighted by how likely each feedback is
    pub expected_remaining: f64,
    pub total_candidates: usize,
}

/// Analyze how `guess` splits `candidates` by feedback
///
/// # Errors
///
/// Returns an error if the guess is not a valid code.
pub fn analyze_guess(guess: &str, candidates: &[Code]) -> Result<AnalysisResult, String> {
    let guess = Code::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let sizes = partition_sizes(&guess, candidates);
    let partitions: Vec<(Feedback, usize)> = Feedback::ALL
        .iter()
        .zip(sizes)
        .filter(|&(_, size)| size > 0)
        .map(|(&feedback, size)| (feedback, size))
        .collect();

    let total_candidates = candidates.len();
    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        sizes.iter().map(|&s| (s * s) as f64).sum::<f64>() / total_candidates as f64
    };

    Ok(AnalysisResult {
        guess,
        max_remaining: sizes.into_iter().max().unwrap_or(0),
        partitions,
        expected_remaining,
        total_candidates,
    })
}
