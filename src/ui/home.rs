use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::{input_cursor, key_hint};
use super::layout::calculate_home_chunks;
use crate::app::App;
use crate::models::StudyMode;

fn mode_blurb(mode: StudyMode) -> &'static str {
    match mode {
        StudyMode::Flashcards => "Memorize concepts quickly",
        StudyMode::Quiz => "Test your knowledge",
        StudyMode::Drill => "Fill in the blanks",
    }
}

pub fn draw_home(f: &mut Frame, app: &App) {
    let layout = calculate_home_chunks(f.area());

    let title = Paragraph::new("MindSpark - What do you want to master today?")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let topic_text = if app.topic.is_empty() {
        Line::from("e.g. Spanish Basics, Quantum Physics, React Hooks...").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Line::from(app.topic.as_str())
    };
    let topic = Paragraph::new(topic_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Topic"),
    );
    f.render_widget(topic, layout.topic_area);

    f.set_cursor_position(input_cursor(layout.topic_area, &app.topic));

    let mode_items: Vec<ListItem> = StudyMode::ALL
        .iter()
        .map(|&mode| {
            let selected = mode == app.selected_mode;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}{:<12} {}", marker, mode.label(), mode_blurb(mode)))
                .style(style)
        })
        .collect();
    let modes = List::new(mode_items)
        .block(Block::default().borders(Borders::ALL).title("Study Mode"));
    f.render_widget(modes, layout.modes_area);

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(layout.status_area);

    let ai_status_content = if app.ai_enabled() {
        vec![
            Line::from("AI: Enabled"),
            Line::from(format!("Model: {}", app.model)),
        ]
    } else {
        vec![
            Line::from("AI: Disabled"),
            Line::from("Set OPENROUTER_API_KEY"),
        ]
    };
    let ai_status = Paragraph::new(ai_status_content)
        .style(
            Style::default()
                .fg(if app.ai_enabled() {
                    Color::Green
                } else {
                    Color::Yellow
                })
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("AI Status"));
    f.render_widget(ai_status, status_chunks[0]);

    let message = Paragraph::new(app.status.as_deref().unwrap_or(""))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(message, status_chunks[1]);

    let mut hints = Vec::new();
    hints.extend(key_hint("Type", " Topic  "));
    hints.extend(key_hint("↑/↓", " Mode  "));
    hints.extend(key_hint("Enter", " Generate  "));
    hints.extend(key_hint("Esc/Ctrl+C", " Quit"));
    let help = Paragraph::new(Line::from(hints))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_loading(f: &mut Frame, mode: StudyMode, topic: &str) {
    let area = super::layout::centered_rect(60, 30, f.area());

    let text = vec![
        Line::from("Generating Content").style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!(
            "AI is preparing your {} on \"{}\"...",
            mode.label().to_lowercase(),
            topic.trim()
        )),
        Line::from(""),
        Line::from("Esc returns home (the result will be discarded)")
            .style(Style::default().fg(Color::DarkGray)),
    ];

    let loading = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, area);
}
