mod action_bar;
mod input_box;
mod layout;
mod statement_card;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::ledger::Statement;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tokio::time::Instant;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    render_at(frame, state, Instant::now());
}

/// Render with an explicit clock, so flash deltas are evaluated against the
/// same instant for every field.
pub fn render_at(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Financial Statements Visualizer",
            Theme::title(),
        )),
        app_layout.title,
    );

    action_bar::render_selector(frame, app_layout.action_select, state);
    input_box::render(frame, app_layout.amount_input, state);
    action_bar::render_execute(frame, app_layout.execute_button, state);
    render_statements(frame, app_layout.statements, state, now);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_statements(frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
    let visible: Vec<Statement> = Statement::ALL
        .into_iter()
        .filter(|s| state.is_visible(*s))
        .collect();

    if visible.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "All statements hidden. Press F1, F2 or F3 to show one.",
            Theme::placeholder(),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    let cards = layout::split_cards(area, visible.len());
    for (statement, card) in visible.into_iter().zip(cards) {
        statement_card::render(frame, card, state, statement, now);
    }
}
