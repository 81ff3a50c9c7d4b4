use super::{input_cursor, key_hint};
use super::layout::calculate_study_chunks;
use crate::engine::DrillEngine;
use crate::models::DrillItem;
use crate::utils::TextInput;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// The sentence with its blank either hidden or filled with the answer.
fn sentence_line(item: &DrillItem, revealed: Option<Color>) -> Line<'_> {
    let (before, after) = item.blank_parts();
    let blank = match revealed {
        Some(color) => Span::styled(
            item.missing_word.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            "?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };
    Line::from(vec![Span::from(before), blank, Span::from(after)])
}

pub fn draw_drill(f: &mut Frame, engine: &DrillEngine, input: &TextInput, topic: &str) {
    let layout = calculate_study_chunks(f.area());

    let Some(item) = engine.current() else {
        return;
    };
    let outcome = engine.outcome();

    let progress = format!("Drill {} / {} - {}", engine.index() + 1, engine.len(), topic);
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let revealed = outcome.map(|o| if o.correct { Color::Green } else { Color::Red });
    let body = Paragraph::new(vec![Line::from(""), sentence_line(item, revealed)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Fill in the blank"));
    f.render_widget(body, layout.body_area);

    let detail_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(layout.detail_area);

    let input_box = Paragraph::new(input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if outcome.is_some() {
                Color::DarkGray
            } else {
                Color::Cyan
            }))
            .title("Your answer"),
    );
    f.render_widget(input_box, detail_chunks[0]);

    if outcome.is_none() {
        f.set_cursor_position(input_cursor(detail_chunks[0], input));
    }

    let feedback = match (outcome, engine.feedback()) {
        (Some(o), Some(message)) => Line::from(message).style(
            Style::default()
                .fg(if o.correct { Color::Green } else { Color::Red })
                .add_modifier(Modifier::BOLD),
        ),
        _ => Line::from("Type the missing word and press Enter.")
            .style(Style::default().fg(Color::DarkGray)),
    };
    let feedback = Paragraph::new(feedback)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Feedback"));
    f.render_widget(feedback, detail_chunks[1]);

    let mut hints = Vec::new();
    if outcome.is_none() {
        hints.extend(key_hint("Enter", " Check  "));
    } else if engine.is_last() {
        hints.extend(key_hint("Enter", " Finish Drill  "));
    } else {
        hints.extend(key_hint("Enter", " Next Sentence  "));
    }
    hints.extend(key_hint("Esc", " Quit to Home"));
    let help = Paragraph::new(Line::from(hints))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
