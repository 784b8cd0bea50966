use crate::flash::Tone;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    /// Value text. Bold and coloured while a change is being shown.
    pub fn value(tone: Tone, flashing: bool) -> Style {
        let base = match (flashing, tone) {
            (true, Tone::Gain) => Style::default().fg(Color::Green),
            (true, Tone::Loss) => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::White),
        };
        if flashing {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }

    pub fn delta(tone: Tone) -> Style {
        match tone {
            Tone::Gain => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::Red),
        }
    }

    pub fn button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
