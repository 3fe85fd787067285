//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, random_codes, run_benchmark};
pub use play::{PlayOutcome, run_play};
pub use solve::{SolveConfig, SolveResult, solve_code};
pub use test_all::{BatchConfig, TestAllStatistics, print_test_all_statistics, run_test_all};
