//! Minimax guess selection
//!
//! Implements Knuth's worst-case minimization for choosing the next guess.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, partition_sizes};
pub use selector::select_best_guess;
