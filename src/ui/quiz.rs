use super::key_hint;
use super::layout::{calculate_study_chunks, centered_rect};
use crate::engine::QuizEngine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn draw_quiz(f: &mut Frame, engine: &QuizEngine, highlighted: usize, topic: &str) {
    let layout = calculate_study_chunks(f.area());

    let Some(question) = engine.current() else {
        return;
    };
    let answer = engine.answer();

    let progress = format!(
        "Question {} / {} - {} - Score {}",
        engine.index() + 1,
        engine.len(),
        topic,
        engine.score()
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        question.question.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));

    for (i, option) in question.options.iter().enumerate() {
        let is_correct = question.is_correct(option);
        let (marker, style) = match answer {
            Some(_) if is_correct => ("✓", Style::default().fg(Color::Green)),
            Some(a) if a.selected == *option => ("✗", Style::default().fg(Color::Red)),
            Some(_) => (" ", Style::default().fg(Color::DarkGray)),
            None if i == highlighted => (
                ">",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (" ", Style::default()),
        };
        text.push_line(Line::from(Span::styled(
            format!("{} {}. {}", marker, i + 1, option),
            style,
        )));
    }

    let body = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(body, layout.body_area);

    let detail = match answer {
        Some(a) => {
            let mut text = Text::default();
            let (verdict, color) = if a.is_correct {
                ("Correct!", Color::Green)
            } else {
                ("Incorrect.", Color::Red)
            };
            text.push_line(Line::from(Span::styled(
                verdict,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(""));
            text.push_line(Line::from(question.explanation.as_str()));
            text
        }
        None => Text::from("Pick an option to see the explanation."),
    };
    let detail = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Explanation"));
    f.render_widget(detail, layout.detail_area);

    let mut hints = Vec::new();
    if answer.is_none() {
        hints.extend(key_hint("↑/↓", " Highlight  "));
        hints.extend(key_hint("Enter/1-9", " Answer  "));
    } else if engine.is_last() {
        hints.extend(key_hint("Enter", " Finish Quiz  "));
    } else {
        hints.extend(key_hint("Enter", " Next Question  "));
    }
    hints.extend(key_hint("Esc", " Quit to Home"));
    let help = Paragraph::new(Line::from(hints))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Quit to Home")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Return to home? Your progress will be lost.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue)"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
