//! Benchmark command
//!
//! Self-plays many target words and summarizes how the solver did.

use super::solve::{SolveResult, solve_target};
use crate::core::Word;
use crate::solver::{GameConfig, GameError, Outcome, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    /// Mean wrong guesses over all games
    pub average_wrong: f64,
    /// Mean letter guesses over all games
    pub average_rounds: f64,
    /// Wrong-guess count → number of games
    pub wrong_distribution: FxHashMap<usize, usize>,
    /// Loss description → number of games
    pub loss_reasons: FxHashMap<String, usize>,
    /// Lost words first, then by wrong guesses, hardest first
    pub hardest: Vec<(String, usize)>,
    pub max_wrong: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_words as f64
        }
    }
}

/// Pick the words to benchmark
///
/// `None` keeps every word; `Some(n)` draws a random sample of `n` words
/// (all of them if there are fewer).
#[must_use]
pub fn select_targets(words: &[Word], count: Option<usize>) -> Vec<Word> {
    match count {
        Some(n) if n < words.len() => words
            .choose_multiple(&mut rand::rng(), n)
            .cloned()
            .collect(),
        _ => words.to_vec(),
    }
}

/// Run benchmark on a set of target words
///
/// Each target is played as a separate game against `words`.
///
/// # Errors
///
/// Returns `GameError` if any game breaks an engine invariant.
pub fn run_benchmark<S: Strategy + Copy + Send + Sync>(
    strategy: S,
    words: &[Word],
    targets: &[Word],
    config: GameConfig,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let results: Vec<SolveResult> = targets
        .par_iter()
        .map(|target| {
            let result = solve_target(target, words, strategy, config);
            pb.inc(1);
            result
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, config.max_wrong, start.elapsed()))
}

fn summarize(results: &[SolveResult], max_wrong: usize, duration: Duration) -> BenchmarkResult {
    let total_words = results.len();
    let wins = results.iter().filter(|r| r.success()).count();

    let mut wrong_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut loss_reasons: FxHashMap<String, usize> = FxHashMap::default();
    for result in results {
        *wrong_distribution.entry(result.wrong_guesses).or_insert(0) += 1;
        if let Outcome::Loss(reason) = &result.outcome {
            *loss_reasons.entry(reason.to_string()).or_insert(0) += 1;
        }
    }

    let mean = |total: usize| {
        if total_words == 0 {
            0.0
        } else {
            total as f64 / total_words as f64
        }
    };
    let average_wrong = mean(results.iter().map(|r| r.wrong_guesses).sum());
    let average_rounds = mean(results.iter().map(|r| r.steps.len()).sum());

    let mut hardest: Vec<(bool, String, usize)> = results
        .iter()
        .filter(|r| !r.success() || r.wrong_guesses > 0)
        .map(|r| (r.success(), r.target.clone(), r.wrong_guesses))
        .collect();
    hardest.sort_by(|a, b| a.0.cmp(&b.0).then(b.2.cmp(&a.2)).then(a.1.cmp(&b.1)));
    hardest.truncate(10);

    let secs = duration.as_secs_f64();
    BenchmarkResult {
        total_words,
        wins,
        losses: total_words - wins,
        average_wrong,
        average_rounds,
        wrong_distribution,
        loss_reasons,
        hardest: hardest.into_iter().map(|(_, word, wrong)| (word, wrong)).collect(),
        max_wrong,
        duration,
        words_per_second: if secs > 0.0 { total_words as f64 / secs } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyStrategy, MAX_WRONG, StrategyType};
    use crate::wordlists::words_from_lines;

    fn dictionary() -> Vec<Word> {
        words_from_lines(
            ["cat", "dog", "bat", "rat", "hat", "mat", "cot", "cut", "pig", "fig"],
            None,
        )
    }

    #[test]
    fn select_targets_all_when_no_count() {
        let words = dictionary();
        assert_eq!(select_targets(&words, None).len(), words.len());
        assert_eq!(select_targets(&words, Some(100)).len(), words.len());
    }

    #[test]
    fn select_targets_samples_distinct_words() {
        let words = dictionary();
        let sample = select_targets(&words, Some(4));
        assert_eq!(sample.len(), 4);
        for word in &sample {
            assert!(words.contains(word));
        }
        for (i, word) in sample.iter().enumerate() {
            assert!(!sample[i + 1..].contains(word));
        }
    }

    #[test]
    fn benchmark_plays_every_target() {
        let words = dictionary();
        let result = run_benchmark(
            FrequencyStrategy,
            &words,
            &words,
            GameConfig::default(),
            false,
        )
        .unwrap();

        assert_eq!(result.total_words, words.len());
        assert_eq!(result.wins + result.losses, result.total_words);
        assert_eq!(result.wrong_distribution.values().sum::<usize>(), words.len());
        assert!(result.average_wrong <= MAX_WRONG as f64);
        assert!(result.average_rounds > 0.0);
        assert!(result.win_rate() > 0.0);
    }

    #[test]
    fn benchmark_counts_losses_for_unknown_words() {
        let words = dictionary();
        let targets = words_from_lines(["cup", "zzz"], None);
        let result = run_benchmark(
            StrategyType::default(),
            &words,
            &targets,
            GameConfig::default(),
            false,
        )
        .unwrap();

        assert_eq!(result.losses, 2);
        assert_eq!(result.loss_reasons.values().sum::<usize>(), 2);
        assert_eq!(result.hardest.len(), 2);
    }

    #[test]
    fn benchmark_empty_targets() {
        let result =
            run_benchmark(FrequencyStrategy, &dictionary(), &[], GameConfig::default(), false)
                .unwrap();
        assert_eq!(result.total_words, 0);
        assert!((result.win_rate() - 0.0).abs() < f64::EPSILON);
    }
}
