//! Mastermind feedback calculation and representation
//!
//! Feedback is the codemaker's answer to a guess: how many pegs are the right
//! colour in the right position (`exact`), and how many more are the right
//! colour in the wrong position (`color_only`).

use super::{CODE_LENGTH, Code};
use std::fmt;

/// Feedback for a guess against a code
///
/// Invariant: `exact + color_only <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
}

impl Feedback {
    /// All pegs correct (full match)
    pub const PERFECT: Self = Self::new(4, 0);

    /// Number of distinct feedback values a four-peg code can produce
    pub const COUNT: usize = 14;

    /// Every feedback value a four-peg code can produce, in ascending order
    ///
    /// `(3, 1)` is missing: three exact pegs leave one peg, which cannot be
    /// the right colour in the wrong place.
    pub const ALL: [Self; Self::COUNT] = [
        Self::new(0, 0),
        Self::new(0, 1),
        Self::new(0, 2),
        Self::new(0, 3),
        Self::new(0, 4),
        Self::new(1, 0),
        Self::new(1, 1),
        Self::new(1, 2),
        Self::new(1, 3),
        Self::new(2, 0),
        Self::new(2, 1),
        Self::new(2, 2),
        Self::new(3, 0),
        Self::new(4, 0),
    ];

    /// Position in `ALL` of the first feedback with a given exact count
    const EXACT_OFFSETS: [usize; CODE_LENGTH + 1] = [0, 5, 9, 12, 13];

    /// Create a feedback value
    ///
    /// # Panics
    /// Panics in debug mode if the counts exceed the number of pegs, or for
    /// the impossible `(3, 1)`
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        debug_assert!(
            (exact + color_only) as usize <= CODE_LENGTH,
            "Feedback counts exceed peg count"
        );
        debug_assert!(
            !(exact == 3 && color_only == 1),
            "Three exact pegs cannot leave a colour-only peg"
        );
        Self { exact, color_only }
    }

    /// Pegs with the right colour in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Pegs with the right colour in the wrong position
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Check if this is a full match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Index of this value within `Feedback::ALL`
    ///
    /// Lets callers bucket feedback into a fixed-size array.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        Self::EXACT_OFFSETS[self.exact as usize] + self.color_only as usize
    }

    /// Calculate the feedback when `guess` is played against the hidden `code`
    ///
    /// Each peg of either code is matched at most once, so duplicate colours
    /// are never over-counted.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches and mark both pegs as consumed
    /// 2. Second pass: for every unconsumed guess peg, consume the first
    ///    unconsumed code peg of the same colour at another position
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let code = Code::new("1234").unwrap();
    /// let guess = Code::new("1523").unwrap();
    ///
    /// let feedback = Feedback::calculate(&code, &guess);
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(code: &Code, guess: &Code) -> Self {
        let code = code.pegs();
        let guess = guess.pegs();

        let mut exact = 0u8;
        let mut color_only = 0u8;
        let mut code_taken = [false; CODE_LENGTH];
        let mut guess_taken = [false; CODE_LENGTH];

        // First pass: right colour, right position
        // Allow: Index needed to access guess[i], code[i], and both taken flags
        #[allow(clippy::needless_range_loop)]
        for i in 0..CODE_LENGTH {
            if guess[i] == code[i] {
                exact += 1;
                code_taken[i] = true;
                guess_taken[i] = true;
            }
        }

        // Second pass: right colour, wrong position
        #[allow(clippy::needless_range_loop)]
        for j in 0..CODE_LENGTH {
            if guess_taken[j] {
                continue;
            }
            let matched =
                (0..CODE_LENGTH).find(|&k| k != j && !code_taken[k] && guess[j] == code[k]);
            if let Some(k) = matched {
                color_only += 1;
                code_taken[k] = true;
                guess_taken[j] = true;
            }
        }

        Self { exact, color_only }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.color_only)
    }
}
