use crate::app::state::*;
use crate::ledger::Selection;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

fn framed(title: &'static str, focused: bool) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1))
}

/// Dropdown-style action selector. Up/Down cycles while focused.
pub fn render_selector(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Action;
    let block = framed(" Action ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let arrows = if focused { "▴▾ " } else { "" };
    let line = match state.session.selection() {
        Some(Selection::Known(kind)) => Line::from(vec![
            Span::styled(arrows, Theme::border_focused()),
            Span::styled(kind.label(), Theme::input_text()),
        ]),
        Some(Selection::Unrecognized(id)) => Line::from(vec![
            Span::styled(arrows, Theme::border_focused()),
            Span::styled(id.as_str(), Theme::placeholder()),
        ]),
        None => Line::from(vec![
            Span::styled(arrows, Theme::border_focused()),
            Span::styled("Select an action", Theme::placeholder()),
        ]),
    };
    frame.render_widget(Paragraph::new(line), inner);
}

/// The execute button. Dimmed while the form is incomplete.
pub fn render_execute(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Execute;
    let enabled = state.can_execute();
    let block = framed("", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button = Paragraph::new(Span::styled(" Execute ", Theme::button(enabled)))
        .alignment(Alignment::Center);
    frame.render_widget(button, inner);
}
