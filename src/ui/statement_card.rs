use crate::app::state::AppState;
use crate::flash::DisplayedValue;
use crate::ledger::{FieldId, Statement};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use tokio::time::Instant;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, statement: Statement, now: Instant) {
    let key = match statement {
        Statement::BalanceSheet => "F1",
        Statement::IncomeStatement => "F2",
        Statement::CashFlow => "F3",
    };
    let block = Block::default()
        .title(format!(" {} ", statement.title()))
        .title_style(Theme::title())
        .title_bottom(Line::from(format!(" {} hide ", key)).right_aligned())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, (heading, fields)) in statement.sections().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let indent = match heading {
            Some(title) => {
                lines.push(Line::from(Span::styled(*title, Theme::heading())));
                "  "
            }
            None => "",
        };
        for &field in fields.iter() {
            lines.push(row(state, field, indent, inner.width as usize, now));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// `Label:` on the left, value and any live delta right-aligned.
fn row(state: &AppState, field: FieldId, indent: &str, width: usize, now: Instant) -> Line<'static> {
    let shown = state.flash.displayed(field, now).unwrap_or(DisplayedValue {
        value: field.read(state.session.snapshot()),
        baseline: field.read(state.session.snapshot()),
        delta: None,
    });
    let tone = shown.tone();

    let left = Span::styled(format!("{}{}:", indent, field.label()), Theme::label());
    let mut right = vec![Span::styled(
        state.currency.amount(shown.value),
        Theme::value(tone, shown.delta.is_some()),
    )];
    if let Some(delta) = shown.delta {
        right.push(Span::raw(" "));
        right.push(Span::styled(state.currency.delta(delta), Theme::delta(tone)));
    }

    let used = left.width() + right.iter().map(|s| s.width()).sum::<usize>();
    let pad = width.saturating_sub(used).max(1);
    let mut spans = vec![left, Span::raw(" ".repeat(pad))];
    spans.extend(right);
    Line::from(spans)
}
