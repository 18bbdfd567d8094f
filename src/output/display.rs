//! Display functions for command results

use super::formatters::{create_progress_bar, format_guess};
use crate::commands::{CandidatesResult, EvalResult, ScoreResult, SolveResult, VerifyStatistics};
use crate::game::Statistics;
use colored::Colorize;

/// How many candidates to list before truncating
const CANDIDATE_LIMIT: usize = 20;

/// Print the inspection of an expression
pub fn print_eval_result(result: &EvalResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Expression: {}", result.input.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    match result.token_count {
        Some(count) => println!("  Tokens:      {count}"),
        None => println!("  Tokens:      {}", "-".bright_black()),
    }
    match &result.syntax {
        Ok(()) => println!("  Syntax:      {}", "ok".green()),
        Err(e) => println!("  Syntax:      {}", e.to_string().red()),
    }
    match &result.value {
        Ok(value) => println!("  Value:       {}", value.to_string().bright_yellow()),
        Err(e) => println!("  Value:       {}", e.to_string().red()),
    }
    println!("  Normalized:  {}", result.normalized);
    println!(
        "  Valid:       {}",
        if result.valid { "yes".green() } else { "no".red() }
    );
}

/// Print the feedback for a scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n  {}", format_guess(&result.guess, &result.feedback));
    println!(
        "  {}  {}",
        result.feedback.to_emoji(),
        result.feedback.to_string().bright_black()
    );
    println!(
        "  {} correct, {} present",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Print the candidates remaining for a target
pub fn print_candidates_result(result: &CandidatesResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        result.target.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n📊 {} of {} candidates remaining",
        result.candidates.len().to_string().bright_cyan().bold(),
        result.total
    );

    for candidate in result.candidates.iter().take(CANDIDATE_LIMIT) {
        println!("  • {candidate}");
    }
    if result.candidates.len() > CANDIDATE_LIMIT {
        println!(
            "  {}",
            format!("… and {} more", result.candidates.len() - CANDIDATE_LIMIT).bright_black()
        );
    }

    match &result.suggestion {
        Some(guess) => println!("\nSuggested guess: {}", guess.bright_green().bold()),
        None => println!(
            "\n{}",
            "❌ No candidates remain! The feedback may be incorrect.".red()
        ),
    }
}

/// Print the result of the solver playing a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.puzzle.target().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            format_guess(&step.guess, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print puzzle list verification results
pub fn print_verify_statistics(stats: &VerifyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE VERIFICATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview".bright_cyan().bold());
    println!("  Puzzles checked:  {}", stats.total);
    println!("  Valid:            {}", stats.valid.to_string().green());
    if !stats.invalid.is_empty() {
        println!(
            "  Invalid:          {}",
            stats.invalid.len().to_string().red()
        );
    }
    println!("  Time taken:       {:.2}s", stats.duration.as_secs_f64());

    let mut lengths: Vec<(usize, usize)> = stats
        .length_distribution
        .iter()
        .map(|(&len, &count)| (len, count))
        .collect();
    lengths.sort_unstable();

    if !lengths.is_empty() {
        println!("\n📈 {}", "Lengths".bright_cyan().bold());
        for (len, count) in lengths {
            let bar = create_progress_bar(count as f64, stats.valid as f64, 40);
            println!("  {len:2} tiles: {} {count:4}", bar.green());
        }
    }

    if !stats.invalid.is_empty() {
        println!("\n❌ {}", "Invalid entries".red().bold());
        for entry in &stats.invalid {
            println!(
                "  #{:<4} {} = {}: {}",
                entry.index, entry.solution, entry.target, entry.error
            );
        }
    }

    if !stats.duplicates.is_empty() {
        println!("\n⚠️  {}", "Duplicates".yellow().bold());
        for (solution, count) in &stats.duplicates {
            println!("  {solution} ({count} times)");
        }
    }

    println!();
    if stats.is_clean() {
        println!("{}", "✅ All puzzles are valid".green().bold());
    }
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    if stats.total_games == 0 {
        return;
    }

    println!("\n📊 {}", "Session Statistics".bright_cyan().bold());
    println!("  Played:          {}", stats.total_games);
    println!("  Win rate:        {:.0}%", stats.win_rate());
    println!("  Current streak:  {}", stats.current_streak);
    println!("  Max streak:      {}", stats.max_streak);

    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if max_count > 0 {
        println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
        for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
            let bar = create_progress_bar(count as f64, max_count as f64, 30);
            println!("  {guesses}: {} {count}", bar.green());
        }
    }
    println!();
}
