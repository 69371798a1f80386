//! Crosswordle Solver - CLI
//!
//! Solves Crosswordle grids from a puzzle code or a list of row colourings.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use crosswordle_solver::{
    commands::{
        SolveConfig, colour_words, load_or_build_table, next_rows, solve_puzzle,
    },
    core::Word,
    output::{
        SearchProgressBar, TableProgressBar, print_colour_result, print_next_rows,
        print_solve_result, print_table_summary,
    },
    puzzle::{Puzzle, PuzzleCode, parse_colourings},
    solver::SearchLimits,
    table::{FeedbackTable, cache},
    wordlists::Lexicon,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "crosswordle_solver",
    about = "Crosswordle solver using a precomputed feedback table and backtracking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Answer words that may sit on the bottom row
    #[arg(short, long, global = true, default_value = "wordles.txt")]
    answers: PathBuf,

    /// Words that may fill any row
    #[arg(short, long, global = true, default_value = "extendedwordles.txt")]
    guesses: PathBuf,

    /// Feedback table cache file
    #[arg(short, long, global = true, default_value = "crosswordle_table.bin")]
    table: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle code, puzzle URL, or bottom-first colouring list
    Solve {
        /// e.g. "v2-0,9,99,20,20,242-x,x,x,x,x,2x" or "242,20,20,99,9,0"
        puzzle: String,

        /// Stop after this many solutions
        #[arg(short, long)]
        max_solutions: Option<usize>,

        /// Stop after this many seconds
        #[arg(long)]
        timeout: Option<f64>,

        /// Search bottom-row branches in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Number of solutions to print
        #[arg(long, default_value = "10")]
        show: usize,

        /// Save a freshly built table to the cache file
        #[arg(long, value_enum, default_value = "ask")]
        save_table: SaveTable,
    },

    /// Build the feedback table and save it to the cache file
    BuildTable,

    /// Show the colouring a guess earns against a solution
    Colour {
        guess: String,
        solution: String,
    },

    /// List the legal words for the next row of a partial stack
    Next {
        /// Bottom-first colourings for the whole puzzle
        colours: String,

        /// Bottom-first words already placed
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SaveTable {
    Ask,
    Yes,
    No,
}

impl SaveTable {
    /// Whether to save, calling `ask` only in `Ask` mode
    fn resolve(self, ask: impl FnOnce() -> Result<bool>) -> Result<bool> {
        match self {
            Self::Yes => Ok(true),
            Self::No => Ok(false),
            Self::Ask => ask(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Solve {
            puzzle,
            max_solutions,
            timeout,
            parallel,
            show,
            save_table,
        } => {
            let timeout = (*timeout).map(Duration::try_from_secs_f64).transpose()?;
            let config = SolveConfig::new(
                SearchLimits {
                    max_solutions: *max_solutions,
                    timeout,
                },
                *parallel,
            );
            run_solve_command(&cli, puzzle, &config, *show, *save_table)
        }
        Commands::BuildTable => run_build_table_command(&cli),
        Commands::Colour { guess, solution } => {
            let result = colour_words(guess, solution)?;
            print_colour_result(&result);
            Ok(())
        }
        Commands::Next { colours, words } => run_next_command(&cli, colours, words),
    }
}

fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    Lexicon::from_files(&cli.answers, &cli.guesses).with_context(|| {
        format!(
            "loading word lists {} and {}",
            cli.answers.display(),
            cli.guesses.display()
        )
    })
}

fn load_table(cli: &Cli, lexicon: &Lexicon, save_mode: SaveTable) -> Result<FeedbackTable> {
    let (table, source) = load_or_build_table(lexicon, Some(&cli.table), &TableProgressBar::new())?;
    print_table_summary(&table, &source);

    let wanted = source.was_built()
        && save_mode.resolve(|| {
            confirm(&format!(
                "Save feedback table to {}? [y/N]",
                cli.table.display()
            ))
        })?;
    if wanted {
        write_table(&table, &cli.table)?;
    }

    Ok(table)
}

fn write_table(table: &FeedbackTable, path: &Path) -> Result<()> {
    cache::save_table(table, path)
        .with_context(|| format!("saving feedback table to {}", path.display()))?;
    println!("💾 Saved feedback table to {}", path.display());
    Ok(())
}

fn parse_puzzle(input: &str, lexicon: &Lexicon) -> Result<Puzzle> {
    if input.contains("v2-") || input.contains("puzzle=") {
        let code = PuzzleCode::parse(input)?;
        if code.upper_pin_count() > 0 {
            println!(
                "{}",
                format!(
                    "⚠ Ignoring {} pinned letters above the bottom row",
                    code.upper_pin_count()
                )
                .yellow()
            );
        }
        return Ok(code.into_puzzle(lexicon.solutions())?);
    }

    let targets = parse_colourings(input)?;
    Ok(Puzzle::new(targets, lexicon.solutions().to_vec())?)
}

fn run_solve_command(
    cli: &Cli,
    input: &str,
    config: &SolveConfig,
    show: usize,
    save_table: SaveTable,
) -> Result<()> {
    let lexicon = load_lexicon(cli)?;
    let puzzle = parse_puzzle(input, &lexicon)?;
    let table = load_table(cli, &lexicon, save_table)?;

    let result = solve_puzzle(config, &table, &puzzle, &SearchProgressBar::new());
    print_solve_result(&result, puzzle.targets(), show);
    Ok(())
}

fn run_build_table_command(cli: &Cli) -> Result<()> {
    let lexicon = load_lexicon(cli)?;
    let table = FeedbackTable::build_with_progress(&lexicon, &TableProgressBar::new())?;
    write_table(&table, &cli.table)
}

fn run_next_command(cli: &Cli, colours: &str, words: &[String]) -> Result<()> {
    let targets = parse_colourings(colours)?;
    let stack = words
        .iter()
        .map(|w| Word::new(w).with_context(|| format!("invalid word '{w}'")))
        .collect::<Result<Vec<_>>>()?;

    let lexicon = load_lexicon(cli)?;
    let table = load_table(cli, &lexicon, SaveTable::No)?;
    print_next_rows(&next_rows(&table, &targets, stack)?);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(is_yes(&get_user_input(prompt)?))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("no input available for prompt");
    }

    Ok(input.trim().to_string())
}
