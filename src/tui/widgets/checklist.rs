//! "Status Validasi" checklist: one ✔/✘ item per submit precondition.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::DepoForm;
use crate::model::UploadField;

/// Returns the six checklist items in display order.
pub fn checklist_items(form: &DepoForm) -> [(&'static str, bool); 6] {
    let uploads = form.uploads();
    [
        ("Unit Dipilih", !form.selected_unit_id().is_empty()),
        ("Waktu Tiba", !form.arrival().is_empty()),
        (
            UploadField::Segel.short_label(),
            uploads.is_uploaded(UploadField::Segel),
        ),
        (
            UploadField::Sib.short_label(),
            uploads.is_uploaded(UploadField::Sib),
        ),
        (
            UploadField::Ftw.short_label(),
            uploads.is_uploaded(UploadField::Ftw),
        ),
        (
            UploadField::P2h.short_label(),
            uploads.is_uploaded(UploadField::P2h),
        ),
    ]
}

/// Renders the checklist as two rows of three items.
#[mutants::skip]
pub fn draw_checklist(form: &DepoForm, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Status Validasi ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = checklist_items(form);
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
    for (row, chunk) in rows.iter().zip(items.chunks(3)) {
        let cols = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(*row);
        for (col, (label, done)) in cols.iter().zip(chunk) {
            let (icon, color) = if *done {
                ("✔", Color::Green)
            } else {
                ("✘", Color::Red)
            };
            let line = Line::from(vec![
                Span::styled(icon, Style::default().fg(color)),
                Span::raw(format!(" {label}")),
            ]);
            frame.render_widget(Paragraph::new(line), *col);
        }
    }
}
