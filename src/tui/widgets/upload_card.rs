//! Upload slot card for one compliance photo.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::UploadField;

/// Renders a card titled with the photo name. Uploaded photos show a
/// green `✓ Uploaded` badge; pending ones a prompt.
#[mutants::skip]
pub fn draw_upload_card(
    field: UploadField,
    uploaded: bool,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = match (focused, uploaded) {
        (true, _) => Color::Yellow,
        (false, true) => Color::Green,
        (false, false) => Color::DarkGray,
    };
    let block = Block::default()
        .title(format!(" {} ", field.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let body = if uploaded {
        Line::from(Span::styled(
            "✓ Uploaded",
            Style::default().fg(Color::Black).bg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            "Enter: pilih file",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(body).block(block), area);
}
