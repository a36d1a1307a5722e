//! Display functions for the line-oriented modes

use super::formatters::{board_row, colored_guess, keyboard_lines};
use crate::commands::ScoreResult;
use crate::game::{GameStatus, GameView, MAX_ATTEMPTS};
use colored::Colorize;

/// Print the board, keyboard and status message
pub fn print_game(view: &impl GameView) {
    println!("\n{}", "─".repeat(40).cyan());
    for row in 1..=MAX_ATTEMPTS {
        println!("   {}", board_row(view, row));
    }
    println!();
    for line in keyboard_lines(view) {
        println!(" {line}");
    }
    println!("{}", "─".repeat(40).cyan());

    let message = view.message().to_string();
    let message = match view.status() {
        GameStatus::Won => message.green().bold(),
        GameStatus::Lost => message.red().bold(),
        GameStatus::InProgress => message.bright_white().bold(),
    };
    println!("{message}\n");
}

/// Print the result of scoring one guess against a secret
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_cyan().bold()
    );
    println!(
        "  {}",
        colored_guess(result.guess.letters(), result.feedback.verdicts())
    );
    println!("  {}", result.feedback.to_emoji());

    if result.feedback.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    }
    if !result.guess_allowed {
        println!("{}", "⚠ guess is not in the dictionary".yellow());
    }
}
