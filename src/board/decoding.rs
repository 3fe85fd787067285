//! Decoding board: secret code, guess log, and guess budget

use super::Oracle;
use crate::core::{Code, CodeError, Feedback};
use rand::Rng;
use std::fmt;

/// Guesses a codebreaker gets in a standard game
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// A Mastermind decoding board
///
/// Stores the secret, every guess with its feedback, and whether the code
/// has been broken. Guesses past the budget or after a full match are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    code: Code,
    max_guesses: usize,
    solved: bool,
    history: Vec<(Code, Feedback)>,
}

impl Board {
    /// Create a board hiding `code`, with the standard budget of 10 guesses
    #[must_use]
    pub const fn new(code: Code) -> Self {
        Self::with_max_guesses(code, DEFAULT_MAX_GUESSES)
    }

    /// Create a board with a custom guess budget
    #[must_use]
    pub const fn with_max_guesses(code: Code, max_guesses: usize) -> Self {
        Self {
            code,
            max_guesses,
            solved: false,
            history: Vec::new(),
        }
    }

    /// Create a board with a uniformly random secret and the given budget
    pub fn random<R: Rng + ?Sized>(rng: &mut R, max_guesses: usize) -> Self {
        Self::with_max_guesses(Code::random(rng), max_guesses)
    }

    /// Validate and record a guess given as text
    ///
    /// # Errors
    /// Returns `CodeError` if the guess is not a valid code. Validation
    /// happens before the budget check, so a malformed guess is rejected
    /// even on a finished board.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::board::Board;
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let mut board = Board::new(Code::new("1234").unwrap());
    /// assert_eq!(board.add_guess("2341").unwrap(), Some(Feedback::new(0, 4)));
    /// assert!(board.add_guess("7890").is_err());
    /// ```
    pub fn add_guess(&mut self, guess: &str) -> Result<Option<Feedback>, CodeError> {
        let guess = Code::new(guess)?;
        Ok(self.record(guess))
    }

    fn record(&mut self, guess: Code) -> Option<Feedback> {
        if self.solved || self.history.len() >= self.max_guesses {
            return None;
        }

        let feedback = Feedback::calculate(&self.code, &guess);
        self.history.push((guess, feedback));
        if feedback.is_perfect() {
            self.solved = true;
        }

        Some(feedback)
    }

    /// The secret code
    #[inline]
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    #[inline]
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Guesses left before the budget runs out (zero once solved)
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        if self.solved {
            0
        } else {
            self.max_guesses.saturating_sub(self.history.len())
        }
    }

    /// Every `(guess, feedback)` pair in the order played
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// Guesses in the order played
    pub fn guesses(&self) -> impl Iterator<Item = Code> + '_ {
        self.history.iter().map(|&(guess, _)| guess)
    }

    /// Feedback in the order played
    pub fn responses(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.history.iter().map(|&(_, feedback)| feedback)
    }

    /// Feedback for the most recent guess
    #[must_use]
    pub fn last_response(&self) -> Option<Feedback> {
        self.history.last().map(|&(_, feedback)| feedback)
    }

    /// Whether no more guesses will be accepted
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.solved || self.history.len() >= self.max_guesses
    }
}

impl Oracle for Board {
    fn submit(&mut self, guess: Code) -> Option<Feedback> {
        self.record(guess)
    }

    fn is_solved(&self) -> bool {
        self.solved
    }

    fn guesses_taken(&self) -> usize {
        self.history.len()
    }

    fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (guess, feedback) in &self.history {
            writeln!(f, "{guess} | {feedback}")?;
        }

        let blank_rows = self.max_guesses.saturating_sub(self.history.len());
        for _ in 0..blank_rows {
            writeln!(f, "     |")?;
        }
        writeln!(f, "-----+")?;

        // Reveal the code once the game is over
        if blank_rows == 0 || self.solved {
            writeln!(f, "{}", self.code)
        } else {
            writeln!(f, "????")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(code: &str) -> Board {
        Board::new(Code::new(code).unwrap())
    }

    #[test]
    fn new_board_is_empty() {
        let board = board("1234");
        assert_eq!(board.code().to_string(), "1234");
        assert_eq!(board.max_guesses(), 10);
        assert!(!board.solved());
        assert!(board.history().is_empty());
        assert_eq!(board.guesses_remaining(), 10);
        assert_eq!(board.last_response(), None);
    }

    #[test]
    fn add_guess_records_feedback() {
        let mut board = board("1234");
        assert_eq!(board.add_guess("1523"), Ok(Some(Feedback::new(1, 2))));
        assert_eq!(board.add_guess("5555"), Ok(Some(Feedback::new(0, 0))));

        let guesses: Vec<String> = board.guesses().map(|g| g.to_string()).collect();
        assert_eq!(guesses, ["1523", "5555"]);
        let responses: Vec<Feedback> = board.responses().collect();
        assert_eq!(responses, [Feedback::new(1, 2), Feedback::new(0, 0)]);
        assert_eq!(board.guesses_remaining(), 8);
    }

    #[test]
    fn invalid_guess_rejected() {
        let mut board = board("1111");
        assert!(board.add_guess("2525").is_ok());
        assert_eq!(board.add_guess("7890"), Err(CodeError::InvalidSymbol('7')));
        assert_eq!(board.add_guess("123"), Err(CodeError::InvalidLength(3)));
        assert_eq!(board.add_guess(" 1234"), Err(CodeError::InvalidLength(5)));
        assert_eq!(board.add_guess(" 1111\t"), Err(CodeError::InvalidLength(6)));
        assert!(!board.solved());
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn guesses_ignored_after_solve() {
        let mut board = board("1234");
        for guess in ["1523", "2341", "5555", "1111", "5111", "1342", "2134", "2543"] {
            board.add_guess(guess).unwrap();
        }
        assert_eq!(board.add_guess("1234"), Ok(Some(Feedback::PERFECT)));
        assert!(board.solved());
        assert_eq!(board.guesses_remaining(), 0);

        assert_eq!(board.add_guess("4321"), Ok(None));
        assert_eq!(board.history().len(), 9);
    }

    #[test]
    fn guesses_ignored_after_budget() {
        let mut board = board("2111");
        for guess in [
            "1654", "1555", "1111", "2222", "3333", "1222", "2112", "1234", "6111", "2121",
        ] {
            assert!(board.add_guess(guess).unwrap().is_some());
        }
        assert!(board.is_finished());

        // Even the right answer is too late
        assert_eq!(board.add_guess("2111"), Ok(None));
        assert!(!board.solved());
        assert_eq!(board.history().len(), 10);
    }

    #[test]
    fn tenth_guess_can_solve() {
        let mut board = board("5566");
        for guess in [
            "5454", "5646", "5561", "5556", "1234", "5446", "6445", "5656", "6655",
        ] {
            board.add_guess(guess).unwrap();
        }
        assert_eq!(board.add_guess("5566"), Ok(Some(Feedback::PERFECT)));
        assert!(board.solved());
        assert_eq!(board.add_guess("4321"), Ok(None));
    }

    #[test]
    fn random_board_is_fresh() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::random(&mut rng, 6);

        assert_eq!(board.max_guesses(), 6);
        assert!(board.history().is_empty());
        assert!(Code::from_pegs(*board.code().pegs()).is_ok());

        let again = Board::random(&mut StdRng::seed_from_u64(42), 6);
        assert_eq!(board.code(), again.code());
    }

    #[test]
    fn oracle_interface() {
        let mut board = Board::with_max_guesses(Code::new("6543").unwrap(), 2);
        assert_eq!(Oracle::max_guesses(&board), 2);

        assert_eq!(board.submit(Code::new("1111").unwrap()), Some(Feedback::new(0, 0)));
        assert_eq!(board.guesses_taken(), 1);
        assert!(!board.is_solved());

        assert_eq!(board.submit(Code::new("6543").unwrap()), Some(Feedback::PERFECT));
        assert!(board.is_solved());
        assert_eq!(board.submit(Code::new("6543").unwrap()), None);
    }

    #[test]
    fn display_hides_code_while_playing() {
        let mut board = Board::with_max_guesses(Code::new("1234").unwrap(), 3);
        board.add_guess("1523").unwrap();

        let expected = "1523 | (1, 2)\n     |\n     |\n-----+\n????\n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn display_reveals_code_when_over() {
        let mut board = Board::with_max_guesses(Code::new("1234").unwrap(), 3);
        board.add_guess("1523").unwrap();
        board.add_guess("1234").unwrap();

        let expected = "1523 | (1, 2)\n1234 | (4, 0)\n     |\n-----+\n1234\n";
        assert_eq!(board.to_string(), expected);

        let mut lost = Board::with_max_guesses(Code::new("1234").unwrap(), 1);
        lost.add_guess("5555").unwrap();
        assert_eq!(lost.to_string(), "5555 | (0, 0)\n-----+\n1234\n");
    }
}
