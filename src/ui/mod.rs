pub mod layout;
mod drill;
mod flashcards;
mod home;
mod quiz;
mod summary;

pub use drill::draw_drill;
pub use flashcards::draw_flashcards;
pub use home::{draw_home, draw_loading};
pub use layout::{calculate_home_chunks, calculate_study_chunks, centered_rect};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_quiz_summary;

use crate::app::{App, View};
use crate::utils::TextInput;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
};

/// Renders whichever screen the app is on, plus the exit prompt when open.
pub fn draw(f: &mut Frame, app: &App) {
    let topic = app
        .session
        .as_ref()
        .map(|s| s.topic().as_str())
        .unwrap_or_default();

    match &app.view {
        View::Home => draw_home(f, app),
        View::Loading(mode) => draw_loading(f, *mode, app.topic.as_str()),
        View::Flashcards(engine) => draw_flashcards(f, engine, topic),
        View::Quiz {
            engine,
            highlighted,
        } => {
            if engine.is_completed() {
                draw_quiz_summary(f, engine, topic);
            } else {
                draw_quiz(f, engine, *highlighted, topic);
            }
        }
        View::Drill { engine, input } => draw_drill(f, engine, input, topic),
    }

    if app.confirm_exit {
        draw_quit_confirmation(f);
    }
}

/// Cursor cell inside a bordered single-line input, clamped to the last inner column.
fn input_cursor(area: Rect, input: &TextInput) -> Position {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let column = input.cursor_column().min(inner_width.saturating_sub(1));
    let offset = u16::try_from(column).unwrap_or(u16::MAX);
    Position::new(
        area.x.saturating_add(1).saturating_add(offset),
        area.y.saturating_add(1),
    )
}

fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(label),
    ]
}
