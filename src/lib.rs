//! Mastermind Solver
//!
//! A Mastermind codebreaker using Knuth's five-guess minimax algorithm. Every
//! one of the 1296 codes is broken in at most five guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::board::Board;
//! use mastermind_solver::core::{Code, Feedback};
//! use mastermind_solver::solver::Solver;
//!
//! // Score a guess
//! let secret = Code::new("1234").unwrap();
//! let guess = Code::new("2341").unwrap();
//! assert_eq!(Feedback::calculate(&secret, &guess), Feedback::new(0, 4));
//!
//! // Break the code
//! let mut board = Board::new(secret);
//! let report = Solver::new().run(&mut board);
//! assert!(report.solved);
//! ```

// Core domain types
pub mod core;

// Decoding board and oracle interface
pub mod board;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
