use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &str = " Tab focus | ↑↓ action | Enter run | F1-F3 panels | Esc quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Action => "ACTION",
        FocusPanel::Amount => "AMOUNT",
        FocusPanel::Execute => "EXECUTE",
    };
    parts.push(Span::styled(format!(" [{}] ", focus_name), Theme::key_hint()));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Pad to fill remaining space, hints flush right
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let hints = Span::styled(HINTS, Theme::key_hint());
    let remaining = (area.width as usize).saturating_sub(used + hints.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(hints);

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
