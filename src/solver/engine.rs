//! Knuth's five-guess codebreaker

use super::minimax::select_best_guess;
use crate::board::Oracle;
use crate::core::{Code, Feedback};
use log::{debug, warn};
use std::time::{Duration, Instant};

/// A single guess step in a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    /// Size of the possible set when this guess was chosen
    pub candidates: usize,
}

/// Outcome of a full solving session
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub steps: Vec<GuessStep>,
    pub solved: bool,
    pub duration: Duration,
}

impl SolveReport {
    /// Number of guesses submitted
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Mastermind codebreaker using Knuth's minimax algorithm
///
/// Tracks every code that is still consistent with the feedback so far
/// (the possible set) and every code not yet guessed (the unused set).
/// Both start as the full set of 1296 codes and only ever shrink.
#[derive(Debug, Clone)]
pub struct Solver {
    universe: Vec<Code>,
    possible: Vec<Code>,
    unused: Vec<Code>,
    opener: Code,
    guesses_made: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Knuth's opening guess
    pub const OPENING_GUESS: Code = Code::from_pegs_unchecked([1, 1, 2, 2]);

    /// Create a solver that opens with `1122`
    #[must_use]
    pub fn new() -> Self {
        Self::with_opener(Self::OPENING_GUESS)
    }

    /// Create a solver with a different first guess
    #[must_use]
    pub fn with_opener(opener: Code) -> Self {
        let universe = Code::all();
        Self {
            possible: universe.clone(),
            unused: universe.clone(),
            universe,
            opener,
            guesses_made: 0,
        }
    }

    /// Every valid code
    #[must_use]
    pub fn universe(&self) -> &[Code] {
        &self.universe
    }

    /// Codes consistent with all feedback seen so far, ascending
    #[must_use]
    pub fn possible(&self) -> &[Code] {
        &self.possible
    }

    /// Codes not yet guessed, ascending
    #[must_use]
    pub fn unused(&self) -> &[Code] {
        &self.unused
    }

    /// First guess this solver plays
    #[must_use]
    pub const fn opener(&self) -> Code {
        self.opener
    }

    /// Choose the next guess
    ///
    /// The first guess is always the opener. After that, the unused code
    /// with the smallest worst-case possible set wins. Returns `None` if no
    /// code is consistent with the feedback or every code has been tried.
    #[must_use]
    pub fn next_guess(&self) -> Option<Code> {
        if self.guesses_made == 0 {
            return Some(self.opener);
        }
        if self.possible.is_empty() {
            return None;
        }

        select_best_guess(&self.unused, &self.possible).map(|(guess, max_remaining)| {
            debug!(
                "minimax picked {guess}: worst case {max_remaining} of {} possible",
                self.possible.len()
            );
            guess
        })
    }

    /// Mark `guess` as played so it is never chosen again
    pub fn commit_guess(&mut self, guess: Code) {
        if let Ok(idx) = self.unused.binary_search(&guess) {
            self.unused.remove(idx);
        }
        self.guesses_made += 1;
    }

    /// Drop every possible code that would not have produced `feedback`
    ///
    /// Returns the number of possible codes left.
    pub fn reduce(&mut self, guess: Code, feedback: Feedback) -> usize {
        if let Ok(idx) = self.possible.binary_search(&guess) {
            self.possible.remove(idx);
        }
        self.possible
            .retain(|candidate| Feedback::calculate(candidate, &guess) == feedback);
        self.possible.len()
    }

    /// Break the code held by `oracle`
    ///
    /// Plays until the oracle reports a full match or the guess budget is
    /// spent. Running out of guesses is a normal outcome and is reported
    /// through `SolveReport::solved`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::board::Board;
    /// use mastermind_solver::core::Code;
    /// use mastermind_solver::solver::Solver;
    ///
    /// let mut board = Board::new(Code::new("1234").unwrap());
    /// let report = Solver::new().run(&mut board);
    ///
    /// assert!(report.solved);
    /// assert!(report.guess_count() <= 5);
    /// ```
    pub fn run<O: Oracle>(&mut self, oracle: &mut O) -> SolveReport {
        let start = Instant::now();
        let mut steps = Vec::new();
        let mut next = self.next_guess();

        while let Some(guess) = next {
            let candidates = self.possible.len();
            self.commit_guess(guess);

            let Some(feedback) = oracle.submit(guess) else {
                warn!("oracle refused guess {guess}");
                break;
            };
            steps.push(GuessStep {
                guess,
                feedback,
                candidates,
            });

            if oracle.is_solved() || oracle.guesses_taken() >= oracle.max_guesses() {
                break;
            }

            let remaining = self.reduce(guess, feedback);
            debug!("guess {guess} scored {feedback}, {remaining} codes remain");

            next = self.next_guess();
            if next.is_none() {
                warn!("no code is consistent with the feedback received");
            }
        }

        SolveReport {
            steps,
            solved: oracle.is_solved(),
            duration: start.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use rustc_hash::FxHashSet;

    fn solve(secret: &str) -> (SolveReport, Board) {
        let mut board = Board::new(Code::new(secret).unwrap());
        let report = Solver::new().run(&mut board);
        (report, board)
    }

    #[test]
    fn opening_guess_is_1122() {
        assert_eq!(Solver::OPENING_GUESS.to_string(), "1122");

        let solver = Solver::new();
        assert_eq!(solver.next_guess(), Some(Solver::OPENING_GUESS));

        let (report, _) = solve("6543");
        assert_eq!(report.steps[0].guess.to_string(), "1122");
        assert_eq!(report.steps[0].candidates, 1296);
    }

    #[test]
    fn new_solver_starts_with_full_sets() {
        let solver = Solver::new();
        assert_eq!(solver.universe().len(), 1296);
        assert_eq!(solver.possible().len(), 1296);
        assert_eq!(solver.unused().len(), 1296);
    }

    #[test]
    fn solves_example_codes() {
        for secret in [
            "1122", "1111", "1234", "6543", "5555", "2424", "6333", "2121", "4565", "6666",
        ] {
            let (report, board) = solve(secret);
            assert!(report.solved, "{secret} not solved");
            assert!(board.solved());
            assert_eq!(report.guess_count(), board.history().len());
            assert_eq!(
                report.steps.last().unwrap().guess.to_string(),
                secret,
                "last guess should be the secret"
            );
        }
    }

    #[test]
    fn opener_secret_solved_in_one() {
        let (report, _) = solve("1122");
        assert_eq!(report.guess_count(), 1);
        assert_eq!(report.steps[0].feedback, Feedback::PERFECT);
    }

    #[test]
    fn guesses_are_never_repeated() {
        let (report, _) = solve("4565");
        let distinct: FxHashSet<Code> = report.steps.iter().map(|s| s.guess).collect();
        assert_eq!(distinct.len(), report.guess_count());
    }

    #[test]
    fn possible_set_shrinks_and_keeps_secret() {
        let secret = Code::new("2424").unwrap();
        let mut board = Board::new(secret);
        let mut solver = Solver::new();
        let mut previous = solver.possible().len();

        while let Some(guess) = solver.next_guess() {
            solver.commit_guess(guess);
            let feedback = board.submit(guess).unwrap();
            if feedback.is_perfect() {
                break;
            }

            let remaining = solver.reduce(guess, feedback);
            assert!(remaining < previous, "possible set must shrink");
            assert!(solver.possible().contains(&secret));
            previous = remaining;
        }

        assert!(board.solved());
    }

    #[test]
    fn unused_set_loses_one_code_per_guess() {
        let mut solver = Solver::new();
        let guess = solver.next_guess().unwrap();
        solver.commit_guess(guess);

        assert_eq!(solver.unused().len(), 1295);
        assert!(!solver.unused().contains(&guess));
        // The opener may still be the answer until feedback says otherwise
        assert!(solver.possible().contains(&guess));
    }

    #[test]
    fn reduce_keeps_only_consistent_codes() {
        let mut solver = Solver::new();
        let guess = Solver::OPENING_GUESS;
        solver.commit_guess(guess);

        let remaining = solver.reduce(guess, Feedback::new(0, 0));
        assert_eq!(remaining, 256);
        assert!(
            solver
                .possible()
                .iter()
                .all(|c| c.pegs().iter().all(|&p| p > 2))
        );
    }

    #[test]
    fn stops_at_guess_budget() {
        let mut board = Board::with_max_guesses(Code::new("6543").unwrap(), 1);
        let report = Solver::new().run(&mut board);

        assert!(!report.solved);
        assert_eq!(report.guess_count(), 1);
        assert_eq!(board.submit(Code::new("6543").unwrap()), None);
    }

    #[test]
    fn no_guess_when_feedback_is_inconsistent() {
        let mut solver = Solver::new();
        let guess = solver.next_guess().unwrap();
        solver.commit_guess(guess);

        // (0, 4) against 1122 leaves only 2211, which (0, 0) then rules out
        solver.reduce(guess, Feedback::new(0, 4));
        solver.reduce(Code::new("2211").unwrap(), Feedback::new(0, 0));

        assert!(solver.possible().is_empty());
        assert_eq!(solver.next_guess(), None);
    }

    #[test]
    fn custom_opener() {
        let opener = Code::new("1234").unwrap();
        let mut board = Board::new(Code::new("5566").unwrap());
        let mut solver = Solver::with_opener(opener);
        assert_eq!(solver.opener(), opener);
        assert_eq!(Solver::new().opener(), Solver::OPENING_GUESS);

        let report = solver.run(&mut board);
        assert_eq!(report.steps[0].guess, opener);
        assert!(report.solved);
    }
}
