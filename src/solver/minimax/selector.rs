//! Minimax-based guess selection
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty.
///
/// Ties are broken deterministically: a guess that is itself still a
/// candidate wins, then the numerically smallest code.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let guesses = vec![Code::new("3333").unwrap(), Code::new("1111").unwrap()];
/// let candidates = vec![Code::new("1111").unwrap(), Code::new("2222").unwrap()];
///
/// let (best, max_remaining) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.to_string(), "1111");
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    let candidate_set: FxHashSet<Code> = candidates.iter().copied().collect();

    guess_pool
        .par_iter()
        .map(|guess| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            // `false` sorts first, so candidates win ties
            (max_remaining, !candidate_set.contains(guess), *guess)
        })
        .min()
        .map(|(max_remaining, _, guess)| (guess, max_remaining))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| Code::new(t).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let guesses = codes(&["6666", "1112"]);
        let candidates = codes(&["1111", "2222", "3333", "4444"]);

        let (best, max_remaining) = select_best_guess(&guesses, &candidates).unwrap();

        // 1112 only confuses 3333 with 4444, 6666 confuses all four
        assert_eq!(best.to_string(), "1112");
        assert_eq!(max_remaining, 2);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = codes(&["1234"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }

    #[test]
    fn ties_prefer_candidates() {
        // Every guess scores 1 against a single candidate
        let guesses = codes(&["1111", "2222", "5555"]);
        let candidates = codes(&["5555"]);

        let (best, max_remaining) = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.to_string(), "5555");
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn ties_without_candidates_pick_smallest() {
        let guesses = codes(&["4444", "3333", "5555"]);
        let candidates = codes(&["1111", "2222"]);

        // None of the guesses distinguish the candidates
        let (best, max_remaining) = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.to_string(), "3333");
        assert_eq!(max_remaining, 2);
    }

    #[test]
    fn ties_among_candidates_pick_smallest() {
        let guesses = codes(&["6666", "2222", "1111"]);
        let candidates = codes(&["1111", "2222"]);

        let (best, _) = select_best_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.to_string(), "1111");
    }

    #[test]
    fn second_guess_after_opener_is_deterministic() {
        let all = Code::all();
        let first = select_best_guess(&all, &all).unwrap();
        let second = select_best_guess(&all, &all).unwrap();
        assert_eq!(first, second);
    }
}
