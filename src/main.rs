//! Reverse Hangman - CLI
//!
//! Think of a word; the program guesses its letters and then the word.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use reverse_hangman::{
    commands::{
        PlaySettings, SolveConfig, run_benchmark, run_play, select_targets, solve_word,
    },
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    solver::{GameConfig, MAX_WRONG, PositionMode, StrategyType},
    wordlists::{DEFAULT_WORDLIST, load_from_file, words_of_length},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "reverse_hangman",
    about = "Reverse hangman: think of a word and let the solver guess it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Strategy: frequency (default) or coverage
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// How confirmed positions prune: 'listed' (default) or 'exact'
    #[arg(long, global = true, default_value = "listed", value_parser = ["listed", "exact"])]
    positions: String,

    /// Wrong guesses allowed before giving up
    #[arg(long, global = true, default_value_t = MAX_WRONG)]
    max_wrong: usize,

    /// Re-ask when a letter is confirmed but no positions are given
    #[arg(long, global = true)]
    reprompt_empty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Let the solver play against a word it is told
    Solve {
        /// The secret word
        word: String,

        /// Show candidate counts for every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Self-play many dictionary words and report statistics
    Benchmark {
        /// Word length to test
        #[arg(short, long)]
        length: usize,

        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test every word of the given length
        #[arg(short, long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let strategy = StrategyType::from_name(&cli.strategy);
    let position_mode = PositionMode::from_name(&cli.positions).unwrap_or_default();
    let config = GameConfig::new(cli.max_wrong, position_mode);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let settings = PlaySettings {
                wordlist: cli.wordlist,
                strategy,
                config,
                reprompt_empty: cli.reprompt_empty,
            };
            run_play(&settings)?;
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            run_solve_command(&cli.wordlist, strategy, config, word, verbose)
        }
        Commands::Benchmark { length, count, all } => {
            let count = if all { None } else { Some(count) };
            run_benchmark_command(&cli.wordlist, strategy, config, length, count)
        }
    }
}

fn run_solve_command(
    wordlist: &Path,
    strategy: StrategyType,
    config: GameConfig,
    word: String,
    verbose: bool,
) -> Result<()> {
    let words = load_from_file(wordlist, None)?;
    let solve_config = SolveConfig { target: word, game: config };
    let result = solve_word(&solve_config, &words, strategy).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    wordlist: &Path,
    strategy: StrategyType,
    config: GameConfig,
    length: usize,
    count: Option<usize>,
) -> Result<()> {
    if length == 0 {
        bail!("Word length must be at least 1");
    }

    let words = load_from_file(wordlist, Some(length))?;
    let targets: Vec<Word> = select_targets(&words_of_length(&words, length), count);

    println!(
        "Running benchmark on {} of {} {length}-letter words (strategy: {})...",
        targets.len(),
        words.len(),
        strategy.name()
    );

    let result = run_benchmark(strategy, &words, &targets, config, true)?;
    print_benchmark_result(&result);
    Ok(())
}
