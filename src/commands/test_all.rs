//! Test all codes - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret code and generates statistics.

use crate::board::Board;
use crate::core::Code;
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Settings shared by every game in a batch
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub max_guesses: usize,
    pub opener: Code,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_guesses: crate::board::DEFAULT_MAX_GUESSES,
            opener: Solver::OPENING_GUESS,
        }
    }
}

/// Result from solving a single code
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
    pub duration: Duration,
}

impl CodeTestResult {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: Vec<Code>,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_codes: Vec<(Code, usize)>,
}

/// Solve one secret with a fresh solver and board
#[must_use]
pub fn test_code(secret: Code, config: BatchConfig) -> CodeTestResult {
    let mut board = Board::with_max_guesses(secret, config.max_guesses);
    let report = Solver::with_opener(config.opener).run(&mut board);

    CodeTestResult {
        secret,
        guesses: report.steps.iter().map(|s| s.guess).collect(),
        success: report.solved,
        duration: report.duration,
    }
}

/// Run the solver on every code in `secrets` (or the first `limit`)
///
/// Games are independent, so they are solved in parallel. Pass
/// `show_progress = false` to suppress the progress bar.
#[must_use]
pub fn run_test_all(
    secrets: &[Code],
    limit: Option<usize>,
    config: BatchConfig,
    show_progress: bool,
) -> TestAllStatistics {
    let test_codes = &secrets[..limit.unwrap_or(secrets.len()).min(secrets.len())];

    info!("testing {} codes, opener {}", test_codes.len(), config.opener);

    let pb = if show_progress {
        ProgressBar::new(test_codes.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = test_codes
        .par_iter()
        .map(|&secret| {
            let result = test_code(secret, config);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

/// Fold per-code results into summary statistics
#[must_use]
pub fn summarize(results: &[CodeTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.num_guesses()).or_insert(0) += 1;
    }

    let solved: Vec<usize> = results
        .iter()
        .filter(|r| r.success)
        .map(CodeTestResult::num_guesses)
        .collect();

    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        solved.iter().sum::<usize>() as f64 / solved.len() as f64
    };

    let failed: Vec<Code> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.secret)
        .collect();

    let max_guesses = solved.iter().copied().max().unwrap_or(0);

    let mut worst_codes: Vec<(Code, usize)> = results
        .iter()
        .filter(|r| r.success && r.num_guesses() == max_guesses)
        .map(|r| (r.secret, r.num_guesses()))
        .collect();
    worst_codes.sort_unstable();
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved.len(),
        failed,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses: solved.iter().copied().min().unwrap_or(0),
        worst_codes,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(60));
    println!(" Test Results ");
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    if stats.total_codes == 0 {
        return;
    }
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_codes as f64 * 100.0
        )
        .green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            format!(
                "({:.1}%)",
                stats.failed.len() as f64 / stats.total_codes as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Guess range:         {} - {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_codes as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    crate::output::print_distribution(&stats.guess_distribution, stats.solved);

    if !stats.worst_codes.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Codes ({} guesses)", stats.max_guesses)
                .yellow()
                .bold()
        );
        for (code, _) in stats.worst_codes.iter().take(5) {
            println!("  {}", code.to_string().yellow());
        }
    }

    if !stats.failed.is_empty() {
        println!("\n❌ {}", "Unsolved Codes".red().bold());
        for code in stats.failed.iter().take(10) {
            println!("  {}", code.to_string().red());
        }
    }
}
