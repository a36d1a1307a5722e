//! Wordle - CLI
//!
//! Play Wordle in the terminal, full-screen or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::{
    commands::{run_simple, score_guess},
    output::print_score_result,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed for secret selection (default: random)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Show the secret word when each game starts
    #[arg(long, global = true)]
    reveal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: Option<&str>) -> Result<Dictionary> {
    let dictionary = match wordlist {
        Some(path) => Dictionary::from_file(path)
            .with_context(|| format!("could not load word list {path}"))?,
        None => Dictionary::embedded().context("embedded word list is empty")?,
    };
    info!("dictionary ready: {} words", dictionary.len());
    Ok(dictionary)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    let rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, rng, cli.reveal),
        Commands::Simple => run_simple_command(&dictionary, rng, cli.reveal),
        Commands::Score { guess, secret } => run_score_command(&guess, &secret, &dictionary),
    }
}

fn run_play_command(dictionary: &Dictionary, rng: StdRng, reveal: bool) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, rng, reveal);
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, mut rng: StdRng, reveal: bool) -> Result<()> {
    run_simple(dictionary, &mut rng, reveal).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(guess: &str, secret: &str, dictionary: &Dictionary) -> Result<()> {
    let result = score_guess(guess, secret, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}
