use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct StudyLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub detail_area: Rect,
    pub help_area: Rect,
}

pub struct HomeLayout {
    pub title_area: Rect,
    pub topic_area: Rect,
    pub modes_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

/// Header, main card, detail/feedback pane and key help, top to bottom.
pub fn calculate_study_chunks(area: Rect) -> StudyLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Percentage(35),
            Constraint::Length(3),
        ])
        .split(area);

    StudyLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        detail_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_home_chunks(area: Rect) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    HomeLayout {
        title_area: chunks[0],
        topic_area: chunks[1],
        modes_area: chunks[2],
        status_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
