//! Mastermind solving algorithms
//!
//! Knuth's five-guess codebreaker and the minimax selection it relies on.

mod engine;
pub mod minimax;

pub use engine::{GuessStep, SolveReport, Solver};
