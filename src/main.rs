//! Mastermind Solver - CLI
//!
//! Breaks Mastermind codes with Knuth's five-guess algorithm, or hides a code
//! for you to break.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    board::{Board, DEFAULT_MAX_GUESSES},
    commands::{
        BatchConfig, SolveConfig, analyze_guess, print_test_all_statistics, random_codes,
        run_benchmark, run_play, run_test_all, solve_code,
    },
    core::Code,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::Solver,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind codebreaker using Knuth's five-guess minimax algorithm",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess budget per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// First guess the solver plays
    #[arg(short, long, global = true, default_value = "1122")]
    opener: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Break a random code yourself (default)
    Play {
        /// Seed for the secret code
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the computer break your code
    Solve {
        /// The secret code, e.g. 1234
        code: String,

        /// Show candidate counts and the final board
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the full code space
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark the solver on random codes
    Benchmark {
        /// Number of random codes to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the random codes
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Solve every possible code
    TestAll {
        /// Limit number of codes to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let opener = Code::new(&cli.opener).map_err(|e| anyhow::anyhow!("Invalid opener: {e}"))?;
    let config = BatchConfig {
        max_guesses: cli.max_guesses,
        opener,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play_command(seed, config),
        Commands::Solve { code, verbose } => run_solve_command(code, verbose, config),
        Commands::Analyze { guess } => run_analyze_command(&guess),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, config);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(limit, config);
            Ok(())
        }
    }
}

fn run_play_command(seed: Option<u64>, config: BatchConfig) -> Result<()> {
    let mut board = Board::random(&mut seeded_rng(seed), config.max_guesses);

    println!("Welcome to Mastermind.");
    let stdin = io::stdin();
    run_play(&mut board, stdin.lock(), &mut io::stdout())?;
    Ok(())
}

fn run_solve_command(code: String, verbose: bool, config: BatchConfig) -> Result<()> {
    let solve_config = SolveConfig {
        secret: code,
        max_guesses: config.max_guesses,
        opener: config.opener,
    };
    let result = solve_code(solve_config).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(guess: &str) -> Result<()> {
    let result = analyze_guess(guess, &Code::all()).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: Option<u64>, config: BatchConfig) {
    println!("Running benchmark on {count} random codes...");

    let secrets = random_codes(count, &mut seeded_rng(seed));
    let result = run_benchmark(&secrets, config);
    print_benchmark_result(&result);
}

fn run_test_all_command(limit: Option<usize>, config: BatchConfig) {
    let all_codes = Code::all();

    println!("\n{}", "═".repeat(60));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(60));
    println!("\nTesting against {} possible codes", all_codes.len());
    if config.opener != Solver::OPENING_GUESS {
        println!("Forced opener: {}", config.opener);
    }
    println!();

    let stats = run_test_all(&all_codes, limit, config, true);
    print_test_all_statistics(&stats);
}
