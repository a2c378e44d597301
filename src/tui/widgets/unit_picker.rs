//! Transport unit picker: scrollable table with a highlight cursor.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use crate::model::Unit;

/// Unit list plus the highlighted row.
#[derive(Debug, Clone, Default)]
pub struct UnitPicker {
    units: Vec<Unit>,
    /// Index of the highlighted unit, or `None` if the list is empty.
    highlighted: Option<usize>,
}

impl UnitPicker {
    /// Creates an empty picker with no highlight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the unit list, keeping the highlight in range.
    pub fn set_units(&mut self, units: Vec<Unit>) {
        self.highlighted = match units.len() {
            0 => None,
            len => Some(self.highlighted.unwrap_or(0).min(len - 1)),
        };
        self.units = units;
    }

    /// Returns the units in display order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the highlighted row index.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Returns the highlighted unit, if any.
    pub fn highlighted_unit(&self) -> Option<&Unit> {
        self.highlighted.and_then(|i| self.units.get(i))
    }

    /// Looks up a unit by ID.
    pub fn find(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Moves the highlight up by one (no wrap).
    pub fn select_prev(&mut self) {
        self.highlighted = match self.highlighted {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the highlight down by one (no wrap).
    pub fn select_next(&mut self) {
        self.highlighted = match self.highlighted {
            Some(i) if i + 1 < self.units.len() => Some(i + 1),
            other => other,
        };
    }
}

/// Renders the picker. The row for `selected_id` is marked with `●`; the
/// highlight bar is only shown while the picker has focus.
#[mutants::skip]
pub fn draw_unit_picker(
    picker: &UnitPicker,
    selected_id: &str,
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
        .title(" Pilih Unit Transport ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if picker.units().is_empty() {
        let empty = Paragraph::new("Belum ada unit. Isi units.jsonl lalu tekan F5.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = picker
        .units()
        .iter()
        .map(|unit| {
            let marker = if unit.id == selected_id { "●" } else { " " };
            Row::new(vec![marker.to_string(), unit.label()])
        })
        .collect();

    let widths = [Constraint::Length(2), Constraint::Min(10)];
    let highlight = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let table = Table::new(rows, widths)
        .block(block)
        .row_highlight_style(highlight);

    let mut state = TableState::default().with_selected(picker.highlighted());
    frame.render_stateful_widget(table, area, &mut state);
}
