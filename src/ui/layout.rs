use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title: Rect,
    pub action_select: Rect,
    pub amount_input: Rect,
    pub execute_button: Rect,
    pub statements: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: title | form | cards | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Action form
            Constraint::Min(5),    // Statement cards
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Form row: action selector | amount | execute button
    let form_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(30),
            Constraint::Length(20),
            Constraint::Length(13),
            Constraint::Min(0),
        ])
        .split(main_chunks[1]);

    AppLayout {
        title: main_chunks[0],
        action_select: form_chunks[0],
        amount_input: form_chunks[1],
        execute_button: form_chunks[2],
        statements: main_chunks[2],
        status_bar: main_chunks[3],
    }
}

/// Split the card area evenly between the visible statements.
pub fn split_cards(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area)
        .to_vec()
}
