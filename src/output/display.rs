//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the result of breaking a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Breaking: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, step) in result.report.steps.iter().enumerate() {
        println!(
            "Turn {:2}: {} | {} {}",
            i + 1,
            step.guess,
            step.feedback,
            feedback_to_pegs(step.feedback)
        );
        if verbose {
            println!("         chosen from {} possible codes", step.candidates);
        }
    }

    if verbose {
        println!("\n{}", result.board);
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!(
                "✅ Broke the code in {} guesses ({:.3}s)",
                result.report.guess_count(),
                result.report.duration.as_secs_f64()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to break the code in {} guesses",
                result.report.guess_count()
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} ",
        "MINIMAX ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!(
        "   Worst case:  {}",
        format!("{} codes remain", result.max_remaining).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} codes remain",
        result.expected_remaining
    );
    println!("   Outcomes:    {}", result.partitions.len());

    println!();
    let largest = result.max_remaining as f64;
    for &(feedback, size) in &result.partitions {
        let bar = create_progress_bar(size as f64, largest, 30);
        println!(
            "   {} {}  {} {size:5}",
            feedback,
            feedback_to_pegs(feedback),
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", stats.total_codes);
    println!(
        "   Solved:           {}",
        format!("{}", stats.solved).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "   Failed:           {}",
            format!("{}", stats.failed.len()).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", stats.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", stats.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&stats.guess_distribution, stats.solved);
}

/// Print a bar per guess count
pub fn print_distribution(distribution: &FxHashMap<usize, usize>, solved: usize) {
    if solved == 0 {
        return;
    }

    let mut counts: Vec<(usize, usize)> = distribution.iter().map(|(&g, &n)| (g, n)).collect();
    counts.sort_unstable();

    let max_count = counts.iter().map(|&(_, n)| n).max().unwrap_or(1);
    for (guesses, count) in counts {
        let pct = count as f64 / solved as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("   {guesses:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
