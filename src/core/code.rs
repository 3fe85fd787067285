//! Mastermind code representation
//!
//! A Code is a row of four pegs, each one of six colours. Colours are written
//! as the digits `1` to `6`, so `"1122"` is two pegs of colour 1 followed by
//! two pegs of colour 2.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// Number of peg colours (symbols `1..=NUM_COLORS`)
pub const NUM_COLORS: u8 = 6;

/// A four-peg Mastermind code
///
/// Ordering is the natural numeric order of the written code, so
/// `1111 < 1112 < ... < 6666`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for malformed codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} pegs, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Code peg '{ch}' is not a colour between 1 and {NUM_COLORS}")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from its written form
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The code is not exactly 4 symbols long
    /// - A symbol is not one of the digits `1` to `6`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::new("1234").unwrap();
    /// assert_eq!(code.to_string(), "1234");
    ///
    /// assert!(Code::new("12345").is_err());
    /// assert!(Code::new("2024").is_err());
    /// assert!(Code::new(" 1234").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut pegs = [0u8; CODE_LENGTH];
        for (peg, ch) in pegs.iter_mut().zip(text.chars()) {
            *peg = match ch.to_digit(10) {
                Some(d) if (1..=u32::from(NUM_COLORS)).contains(&d) => d as u8,
                _ => return Err(CodeError::InvalidSymbol(ch)),
            };
        }

        Ok(Self(pegs))
    }

    /// Create a Code from peg colours in `1..=6`
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSymbol` if any peg is out of range.
    pub fn from_pegs(pegs: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        match pegs.iter().find(|&&p| p == 0 || p > NUM_COLORS) {
            Some(&bad) => Err(CodeError::InvalidSymbol(peg_symbol(bad))),
            None => Ok(Self(pegs)),
        }
    }

    /// Build a code from pegs already known to be in range
    pub(crate) const fn from_pegs_unchecked(pegs: [u8; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    /// Get the peg colours
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the peg colour at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn peg_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Every valid code, in ascending order
    ///
    /// This is the full search space of 6^4 = 1296 codes, built as the
    /// Cartesian product of the colours with themselves.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let all = Code::all();
    /// assert_eq!(all.len(), 1296);
    /// assert_eq!(all[0].to_string(), "1111");
    /// assert_eq!(all[1295].to_string(), "6666");
    /// ```
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut codes = vec![Self([1; CODE_LENGTH])];

        for position in 0..CODE_LENGTH {
            codes = codes
                .into_iter()
                .flat_map(|code| {
                    (1..=NUM_COLORS).map(move |colour| {
                        let mut pegs = code.0;
                        pegs[position] = colour;
                        Self(pegs)
                    })
                })
                .collect();
        }

        codes.sort_unstable();
        codes
    }

    /// Draw a uniformly random code
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pegs = [0u8; CODE_LENGTH];
        for peg in &mut pegs {
            *peg = rng.random_range(1..=NUM_COLORS);
        }
        Self(pegs)
    }
}

fn peg_symbol(peg: u8) -> char {
    char::from_digit(u32::from(peg), 10).unwrap_or('?')
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &peg in &self.0 {
            write!(f, "{}", peg_symbol(peg))?;
        }
        Ok(())
    }
}
