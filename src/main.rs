//! Numble - CLI
//!
//! Find the hidden equation that equals the target, with duplicate-aware
//! tile feedback after every guess.

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;
use numble::{
    commands::{
        SolveConfig, autoplay, evaluate_expression, list_candidates, run_play, run_verify,
        score_guess,
    },
    game::{GameConfig, Statistics},
    output::{
        print_candidates_result, print_eval_result, print_score_result, print_solve_result,
        print_statistics, print_verify_statistics,
    },
    puzzles::{
        PUZZLES, Puzzle,
        loader::{load_from_file, puzzles_from_slice, read_entries},
        select,
    },
};

#[derive(Parser)]
#[command(
    name = "numble",
    about = "Arithmetic guessing game with duplicate-aware tile feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle list: 'embedded' (default) or path to file
    #[arg(short = 'p', long, global = true, default_value = "embedded")]
    puzzles: String,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        #[command(flatten)]
        choice: PuzzleChoice,

        /// Guesses allowed per game
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Tokenize, evaluate and normalize an expression
    Eval {
        /// Expression to inspect
        expression: String,
    },

    /// Score a guess against a solution
    Score {
        guess: String,
        solution: String,
    },

    /// List candidate solutions for a target
    Solve {
        /// Target value
        target: i64,

        /// Number of tiles
        #[arg(short, long, default_value = "6")]
        length: usize,

        /// Previous guess and feedback, e.g. 5*2+10:YYYYYY (repeatable)
        #[arg(long = "history", value_name = "GUESS:FEEDBACK")]
        history: Vec<String>,
    },

    /// Let the solver play a puzzle
    Autoplay {
        #[command(flatten)]
        choice: PuzzleChoice,

        /// Guesses allowed
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Check every entry of the puzzle list
    Verify,
}

/// Which puzzle to use
#[derive(Args, Clone, Default)]
struct PuzzleChoice {
    /// Play the puzzle for a date (YYYY-MM-DD) instead of today
    #[arg(short, long, conflicts_with = "random")]
    date: Option<String>,

    /// Pick a random puzzle
    #[arg(short, long)]
    random: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

/// Load puzzles based on the -p flag
fn load_puzzles(source: &str) -> Result<Vec<Puzzle>> {
    let puzzles = match source {
        "embedded" => puzzles_from_slice(PUZZLES),
        path => load_from_file(path).with_context(|| format!("Failed to read {path}"))?,
    };

    if puzzles.is_empty() {
        bail!("No valid puzzles in '{source}'");
    }
    log::debug!("Loaded {} puzzles from {source}", puzzles.len());
    Ok(puzzles)
}

fn choose_puzzle<'a>(puzzles: &'a [Puzzle], choice: &PuzzleChoice) -> Result<&'a Puzzle> {
    let puzzle = if choice.random {
        select::random(puzzles)
    } else {
        let date = match &choice.date {
            Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{text}', expected YYYY-MM-DD"))?,
            None => select::today(),
        };
        log::debug!("Selecting the puzzle for {date}");
        select::daily(puzzles, date)
    };

    puzzle.ok_or_else(|| anyhow!("No puzzle available"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or_else(|| Commands::Play {
        choice: PuzzleChoice::default(),
        max_guesses: GameConfig::new().max_guesses,
    });

    match command {
        Commands::Play {
            choice,
            max_guesses,
        } => run_play_command(&cli.puzzles, &choice, max_guesses),
        Commands::Eval { expression } => {
            print_eval_result(&evaluate_expression(&expression));
            Ok(())
        }
        Commands::Score { guess, solution } => {
            let result = score_guess(&guess, &solution).map_err(|e| anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Solve {
            target,
            length,
            history,
        } => run_solve_command(target, length, &history),
        Commands::Autoplay {
            choice,
            max_guesses,
        } => run_autoplay_command(&cli.puzzles, &choice, max_guesses, cli.verbose),
        Commands::Verify => run_verify_command(&cli.puzzles),
    }
}

fn run_play_command(source: &str, choice: &PuzzleChoice, max_guesses: usize) -> Result<()> {
    if max_guesses == 0 {
        bail!("--max-guesses must be at least 1");
    }

    let puzzles = load_puzzles(source)?;
    let puzzle = choose_puzzle(&puzzles, choice)?;

    let mut stats = Statistics::default();
    run_play(puzzle, &puzzles, GameConfig { max_guesses }, &mut stats).map_err(|e| anyhow!(e))?;
    print_statistics(&stats);
    Ok(())
}

fn run_solve_command(target: i64, length: usize, history: &[String]) -> Result<()> {
    let mut config = SolveConfig::new(target);
    config.length = length;
    for entry in history {
        config.push_history(entry).map_err(|e| anyhow!(e))?;
    }

    let result = list_candidates(&config).map_err(|e| anyhow!(e))?;
    print_candidates_result(&result);
    Ok(())
}

fn run_autoplay_command(
    source: &str,
    choice: &PuzzleChoice,
    max_guesses: usize,
    verbose: bool,
) -> Result<()> {
    if max_guesses == 0 {
        bail!("--max-guesses must be at least 1");
    }

    let puzzles = load_puzzles(source)?;
    let puzzle = choose_puzzle(&puzzles, choice)?;

    let result = autoplay(puzzle, max_guesses).map_err(|e| anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_verify_command(source: &str) -> Result<()> {
    let stats = if source == "embedded" {
        run_verify(PUZZLES, true)
    } else {
        let entries = read_entries(source).with_context(|| format!("Failed to read {source}"))?;
        run_verify(&entries, true)
    };

    print_verify_statistics(&stats);
    if !stats.invalid.is_empty() {
        bail!("{} invalid puzzles", stats.invalid.len());
    }
    Ok(())
}
