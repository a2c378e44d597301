//! Single-line text input with a character filter and length cap.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Editing rules for a text input.
#[derive(Debug, Clone, Copy)]
pub struct InputRules {
    /// Characters the input accepts; anything else is dropped.
    pub accepts: fn(char) -> bool,
    /// Maximum number of characters.
    pub max_len: usize,
}

impl InputRules {
    /// Returns `value` with `ch` appended, or `None` if the rules reject it.
    pub fn push(&self, value: &str, ch: char) -> Option<String> {
        if !(self.accepts)(ch) || value.chars().count() >= self.max_len {
            return None;
        }
        let mut next = value.to_string();
        next.push(ch);
        Some(next)
    }

    /// Returns `value` without its last character.
    pub fn pop(&self, value: &str) -> String {
        let mut next = value.to_string();
        next.pop();
        next
    }
}

/// Renders a bordered input. A focused input gets a Yellow border and a
/// block cursor; `placeholder` is shown dimmed while the value is empty.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_text_input(
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = if value.is_empty() && !focused {
        vec![Span::styled(placeholder, Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::raw(value)]
    };
    if focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
