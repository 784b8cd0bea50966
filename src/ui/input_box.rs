use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The amount field.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Amount;
    let block = Block::default()
        .title(" Amount ")
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
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let text = state.input.text.as_str();
    let (start, cursor_col) = scroll_window(text, state.input.cursor, inner.width);
    let paragraph = Paragraph::new(&text[start..]).style(Theme::input_text());
    frame.render_widget(paragraph, inner);

    if focused {
        frame.set_cursor_position((inner.x + cursor_col, inner.y));
    }
}

/// Byte offset to start drawing from, and the cursor's column relative to
/// it, so that the cursor stays inside `width` columns.
fn scroll_window(text: &str, cursor: usize, width: u16) -> (usize, u16) {
    let width = width as usize;
    let before = &text[..cursor];
    let mut start = 0;
    let mut col = before.width();
    for (i, c) in before.char_indices() {
        if col < width {
            break;
        }
        start = i + c.len_utf8();
        col -= c.width().unwrap_or(0);
    }
    (start, col as u16)
}
