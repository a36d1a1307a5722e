//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and status line for the game.

use super::app::App;
use crate::core::{LetterStatus, WORD_LEN};
use crate::game::{GameStatus, GameView, MAX_ATTEMPTS};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Header
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 2), // Board
            Constraint::Length(5),                          // Keyboard
            Constraint::Length(3),                          // Message
            Constraint::Min(1),                             // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &app.game, chunks[1]);
    render_keyboard(f, &app.game, chunks[2]);
    render_message(f, &app.game, chunks[3]);
    render_help(f, &app.game, chunks[4]);
}

/// Tile style for a letter status
///
/// Verdict colours: Correct green, Present yellow, Absent gray.
fn tile_style(status: LetterStatus) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        LetterStatus::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => base.fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => base.fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unknown => base.fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_line(view: &impl GameView, row: usize) -> Line<'static> {
    let spans: Vec<Span> = (1..=WORD_LEN)
        .flat_map(|col| {
            let tile = match view.letter_at(row, col) {
                Some(letter) => {
                    let status = view
                        .verdict_at(row, col)
                        .map_or(LetterStatus::Unknown, LetterStatus::from);
                    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), tile_style(status))
                }
                None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            };
            [tile, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, view: &impl GameView, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for row in 1..=MAX_ATTEMPTS {
        lines.push(board_line(view, row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, view: &impl GameView, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|ch| {
                    [
                        Span::styled(
                            format!(" {} ", ch.to_ascii_uppercase()),
                            tile_style(view.letter_status(ch)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_message(f: &mut Frame, view: &impl GameView, area: Rect) {
    let color = match view.status() {
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
        GameStatus::InProgress => Color::Yellow,
    };

    let message = Paragraph::new(view.message().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(message, area);
}

fn render_help(f: &mut Frame, view: &impl GameView, area: Rect) {
    let help_text = if view.status().is_over() {
        "Tab: New Game | Esc: Quit"
    } else {
        "a-z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Game;
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn board_line_styles_submitted_tiles() {
        let dictionary = Dictionary::from_strs(&["crane", "acorn"]).unwrap();
        let mut game = Game::with_secret(&dictionary, Word::new("crane").unwrap());
        game.type_word("acorn");
        game.submit();
        game.type_word("cr");

        let submitted = board_line(&game, 1);
        assert_eq!(submitted.spans[0].content, " A ");
        assert_eq!(submitted.spans[0].style.bg, Some(Color::Yellow));
        assert_eq!(submitted.spans[4].style.bg, Some(Color::DarkGray));

        let typing = board_line(&game, 2);
        assert_eq!(typing.spans[2].content, " R ");
        assert_eq!(typing.spans[2].style.bg, None);
        assert_eq!(typing.spans[4].content, " · ");
    }

    #[test]
    fn ui_renders_message() {
        let dictionary = Dictionary::from_strs(&["crane"]).unwrap();
        let app = App::new(&dictionary, StdRng::seed_from_u64(0), false);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Let's Play Wordle"));
        assert!(text.contains("W O R D L E"));
    }
}
