//! Display functions for command results

use super::formatters::{create_progress_bar, letter_label, spaced, wrong_meter};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::Outcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({} candidate words)",
        result.target.to_uppercase().bright_yellow().bold(),
        result.initial_candidates
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        let verdict = if step.hit {
            format!("yes @ {}", step.positions).green()
        } else {
            "no".red()
        };
        println!(
            "\nRound {}: {} {}  {}",
            turn,
            letter_label(step.letter).bright_white().bold(),
            verdict,
            spaced(&step.partial)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    println!(
        "Wrong guesses: {} {}/{}",
        wrong_meter(result.wrong_guesses, result.max_wrong).yellow(),
        result.wrong_guesses,
        result.max_wrong
    );
    match &result.outcome {
        Outcome::Win(word) => println!(
            "{}",
            format!("✅ Found {} in {} rounds!", word, result.steps.len())
                .green()
                .bold()
        ),
        Outcome::Loss(reason) => println!(
            "{}",
            format!("❌ Lost after {} rounds: {reason}", result.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Wins / losses:    {} / {}",
        format!("{}", result.wins).green(),
        format!("{}", result.losses).red()
    );
    println!("   Avg wrong:        {:.2}", result.average_wrong);
    println!("   Avg rounds:       {:.2}", result.average_rounds);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
        for wrong in 0..=result.max_wrong {
            if let Some(&count) = result.wrong_distribution.get(&wrong) {
                let pct = (count as f64 / result.total_words as f64) * 100.0;
                let bar = create_progress_bar(pct, 100.0, 40);
                println!("   {wrong:2}: {} {count:5} ({pct:5.1}%)", bar.green());
            }
        }
    }

    if !result.loss_reasons.is_empty() {
        println!("\n💀 {}", "Losses:".bright_cyan().bold());
        let mut reasons: Vec<_> = result.loss_reasons.iter().collect();
        reasons.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (reason, count) in reasons {
            println!("   {count:5}  {reason}");
        }
    }

    if !result.hardest.is_empty() {
        println!("\n🧗 {}", "Hardest words:".bright_cyan().bold());
        for (word, wrong) in &result.hardest {
            println!("   {} {wrong} wrong", format!("{word:<12}").bright_white());
        }
    }
}
