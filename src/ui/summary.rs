use super::key_hint;
use crate::engine::QuizEngine;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn verdict(percentage: u32) -> (&'static str, Color) {
    match percentage {
        80.. => ("Excellent work!", Color::Green),
        50..=79 => ("Good effort, keep practicing.", Color::Yellow),
        _ => ("Keep studying and try again.", Color::Red),
    }
}

pub fn draw_quiz_summary(f: &mut Frame, engine: &QuizEngine, topic: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Quiz Complete - {}", truncate_string(topic, 60)))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let Some(result) = engine.result() else {
        return;
    };
    let percentage = result.percentage();
    let (message, color) = verdict(percentage);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!("Score: {} / {}", result.score, result.total)));
    text.push_line(
        Line::from(format!("{}%", percentage))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
    );
    text.push_line(Line::from(""));
    text.push_line(Line::from(message).style(Style::default().fg(color)));

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(body, chunks[1]);

    let mut hints = Vec::new();
    hints.extend(key_hint("Enter/Esc", " Back to Home"));
    let help = Paragraph::new(Line::from(hints))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
