//! Code solving command
//!
//! Breaks a specific secret code and returns the solution path.

use crate::board::Board;
use crate::core::Code;
use crate::solver::{SolveReport, Solver};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
    pub opener: Code,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: crate::board::DEFAULT_MAX_GUESSES,
            opener: Solver::OPENING_GUESS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub report: SolveReport,
    pub board: Board,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.report.solved
    }
}

/// Break a specific code with Knuth's algorithm
///
/// # Errors
///
/// Returns an error if the secret is not a valid code. Failing to break the
/// code within the guess budget is not an error; check `SolveResult::success`.
pub fn solve_code(config: SolveConfig) -> Result<SolveResult, String> {
    let secret = Code::new(&config.secret).map_err(|e| format!("Invalid code: {e}"))?;

    let mut board = Board::with_max_guesses(secret, config.max_guesses);
    let report = Solver::with_opener(config.opener).run(&mut board);

    Ok(SolveResult {
        secret,
        report,
        board,
    })
}
