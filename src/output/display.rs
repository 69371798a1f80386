//! Display functions for command results

use super::formatters::{
    colouring_to_emoji, create_progress_bar, spaced_word, stack_lines, stack_summary,
};
use crate::commands::{ColourResult, NextRows, SolveResult, TableSource};
use crate::core::{Colouring, Word};
use crate::solver::StopReason;
use crate::table::FeedbackTable;
use colored::Colorize;

/// Print the result of solving a puzzle, showing at most `show` stacks
pub fn print_solve_result(result: &SolveResult, targets: &[Colouring], show: usize) {
    let outcome = &result.outcome;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {} rows, {} bottom-row candidates",
        result.height.to_string().bright_yellow().bold(),
        result.candidates.to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, stack) in outcome.solutions.iter().take(show).enumerate() {
        println!("\nSolution {}:", i + 1);
        for line in stack_lines(stack, targets) {
            println!("   {line}");
        }
    }

    if outcome.solutions.len() > show {
        println!(
            "\n   {}",
            format!("... {} more not shown", outcome.solutions.len() - show).bright_black()
        );
    }

    let mut bottoms: Vec<&Word> = outcome.solutions.iter().filter_map(|s| s.first()).collect();
    bottoms.dedup();
    if result.candidates > 0 {
        println!(
            "\n📊 Bottom words used: [{}] {}/{}",
            create_progress_bar(bottoms.len() as f64, result.candidates as f64, 30).green(),
            bottoms.len(),
            result.candidates
        );
    }

    println!();
    let summary = format!(
        "{} solutions in {:.2}s",
        outcome.solutions.len(),
        outcome.elapsed.as_secs_f64()
    );
    match outcome.stopped {
        None if outcome.solutions.is_empty() => {
            println!("{}", format!("❌ No {summary}").red().bold());
        }
        None => println!("{}", format!("✅ Found {summary}").green().bold()),
        Some(StopReason::SolutionLimit) => println!(
            "{}",
            format!("⏸  Stopped at the solution limit: {summary}")
                .yellow()
                .bold()
        ),
        Some(StopReason::Timeout) => println!(
            "{}",
            format!("⏱  Timed out with {summary}").yellow().bold()
        ),
    }
}

/// Print the colouring of a guess against a solution
pub fn print_colour_result(result: &ColourResult) {
    println!(
        "{}  {}",
        colouring_to_emoji(result.colouring),
        spaced_word(&result.guess)
    );
    println!(
        "Against {}: {} (code {})",
        result.solution.as_str().to_uppercase().bright_yellow(),
        result.colouring,
        result.colouring.code()
    );
}

/// Print the legal words for the next row of a partial stack
pub fn print_next_rows(next: &NextRows) {
    println!(
        "\n{} {}",
        "Next row target:".bright_cyan().bold(),
        colouring_to_emoji(next.target)
    );
    println!("Stack: {}", stack_summary(&next.stack));

    if next.options.is_empty() {
        println!("{}", "No legal words for this row".red());
        return;
    }

    println!("{} legal words:", next.options.len().to_string().green());
    for chunk in next.options.chunks(10) {
        let words: Vec<&str> = chunk.iter().map(Word::as_str).collect();
        println!("   {}", words.join(" "));
    }
}

/// Print where the feedback table came from and its size
pub fn print_table_summary(table: &FeedbackTable, source: &TableSource) {
    match source {
        TableSource::Cache(path) => println!(
            "📦 Loaded feedback table from {}",
            path.display().to_string().bright_cyan()
        ),
        TableSource::Built { reason: Some(reason) } => {
            println!("{} {reason}", "⚠ Cache not used:".yellow());
            println!("🔨 Built feedback table");
        }
        TableSource::Built { reason: None } => println!("🔨 Built feedback table"),
    }
    println!(
        "   {} solutions × {} guesses, {} buckets holding {} pairs",
        table.solution_count(),
        table.guess_count(),
        table.len(),
        table.pair_count()
    );
}
