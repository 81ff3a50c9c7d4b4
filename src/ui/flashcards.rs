use super::key_hint;
use super::layout::calculate_study_chunks;
use crate::engine::FlashcardEngine;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_flashcards(f: &mut Frame, engine: &FlashcardEngine, topic: &str) {
    let layout = calculate_study_chunks(f.area());

    let progress = format!("Card {} / {} - {}", engine.index() + 1, engine.len(), topic);
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let Some(card) = engine.current() else {
        let empty = Paragraph::new("No cards in this deck.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, layout.body_area);
        return;
    };

    let (title, face, color) = if engine.is_flipped() {
        ("Back", card.back.as_str(), Color::Green)
    } else {
        ("Front", card.front.as_str(), Color::Yellow)
    };

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(face).style(Style::default().fg(color).add_modifier(Modifier::BOLD)));
    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, layout.body_area);

    let detail = if engine.is_flipped() {
        format!("Term: {}", card.front)
    } else {
        "Press Space to reveal the answer".to_string()
    };
    let detail = Paragraph::new(detail)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(detail, layout.detail_area);

    let mut hints = Vec::new();
    hints.extend(key_hint("Space", " Flip  "));
    hints.extend(key_hint("←/→", " Prev/Next  "));
    hints.extend(key_hint("Esc", " Home"));
    let help = Paragraph::new(Line::from(hints))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
