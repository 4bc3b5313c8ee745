//! Hangman-specific renderer
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::renderer::GameRenderer;
use crate::engine::Phase;
use crate::games::hangman::HangmanGame;

pub struct HangmanRenderer;

impl GameRenderer<HangmanGame> for HangmanRenderer {
    fn render(frame: &mut Frame, state: &HangmanGame) {
        let view = state.view();
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(frame.area());

        frame.render_widget(
            Paragraph::new(format!(" HANGMAN  ·  {} ", state.difficulty().to_string().to_uppercase()))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let wrong: String = view.wrong.iter().map(|c| format!("{c} ")).collect();
        let board = format!(
            "\n{}\n\nLives: {} {}\nWrong: {}",
            view.masked,
            view.lives,
            "❤".repeat(view.lives as usize),
            if wrong.is_empty() { "-" } else { wrong.trim_end() },
        );
        frame.render_widget(
            Paragraph::new(board)
                .alignment(Alignment::Center)
                .block(Block::default().title(" WORD ").borders(Borders::ALL)),
            chunks[1],
        );

        let (banner, style) = match state.phase() {
            Phase::Won => ("🎉 You guessed it!", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Phase::Lost => ("💀 Game over", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Phase::InProgress => ("", Style::default()),
        };
        frame.render_widget(
            Paragraph::new(format!("{} {}", state.message, banner))
                .style(style)
                .block(Block::default().borders(Borders::ALL)),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(format!(" > {}", state.input))
                .block(Block::default().title(" GUESS ").borders(Borders::ALL)),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new("[Enter] Guess  [Tab] Next difficulty  [Ctrl-R] Restart  [Esc] Quit")
                .alignment(Alignment::Center),
            chunks[4],
        );
    }
}
