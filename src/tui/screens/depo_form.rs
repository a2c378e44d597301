//! Depot supervisor screen: unit, arrival time, photo uploads, and the
//! "Lanjutkan MSF" button.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::DepoForm;
use crate::model::{MAX_ARRIVAL_LEN, Unit, UploadField, is_arrival_char};
use crate::tui::action::Action;
use crate::tui::widgets::{
    InputRules, UnitPicker, draw_checklist, draw_text_input, draw_unit_picker, draw_upload_card,
};

const ARRIVAL_RULES: InputRules = InputRules {
    accepts: is_arrival_char,
    max_len: MAX_ARRIVAL_LEN,
};

pub const SUBMIT_READY_LABEL: &str = "✔ Lanjutkan MSF & Notifikasi GL PAMA";
pub const SUBMIT_BLOCKED_LABEL: &str = "⚠ Lengkapi Semua Dokumen untuk Lanjutkan MSF";

/// Focusable parts of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Unit,
    Arrival,
    Upload(UploadField),
    Submit,
}

/// Tab order.
const FOCUS_ORDER: [Focus; 7] = [
    Focus::Unit,
    Focus::Arrival,
    Focus::Upload(UploadField::Segel),
    Focus::Upload(UploadField::Sib),
    Focus::Upload(UploadField::Ftw),
    Focus::Upload(UploadField::P2h),
    Focus::Submit,
];

impl Focus {
    fn index(self) -> usize {
        FOCUS_ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Next focus in Tab order, wrapping around.
    pub fn next(self) -> Self {
        FOCUS_ORDER[(self.index() + 1) % FOCUS_ORDER.len()]
    }

    /// Previous focus in Tab order, wrapping around.
    pub fn prev(self) -> Self {
        FOCUS_ORDER[(self.index() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }
}

/// State for the depot supervisor screen.
#[derive(Debug, Clone)]
pub struct DepoFormState {
    form: DepoForm,
    picker: UnitPicker,
    focus: Focus,
}

impl Default for DepoFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl DepoFormState {
    /// Creates an empty screen with no units and focus on the unit picker.
    pub fn new() -> Self {
        Self {
            form: DepoForm::new(),
            picker: UnitPicker::new(),
            focus: Focus::Unit,
        }
    }

    /// Returns the underlying form.
    pub fn form(&self) -> &DepoForm {
        &self.form
    }

    /// Returns the underlying form for mutation.
    pub fn form_mut(&mut self) -> &mut DepoForm {
        &mut self.form
    }

    /// Returns the unit picker.
    pub fn picker(&self) -> &UnitPicker {
        &self.picker
    }

    /// Returns the section that currently has focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Replaces the unit list. A selected unit that is no longer listed is
    /// deselected.
    pub fn set_units(&mut self, units: Vec<Unit>) {
        self.picker.set_units(units);
        let selected = self.form.selected_unit_id();
        if !selected.is_empty() && self.picker.find(selected).is_none() {
            self.form.select_unit("");
        }
    }

    /// Returns focus to the unit picker after a successful submit.
    pub fn on_submitted(&mut self) {
        self.focus = Focus::Unit;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Action::None;
            }
            KeyCode::Esc => return Action::Quit,
            _ => {}
        }

        match self.focus {
            Focus::Unit => self.handle_unit_key(key),
            Focus::Arrival => self.handle_arrival_key(key),
            Focus::Upload(field) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Action::MarkUploaded(field),
                _ => Action::None,
            },
            Focus::Submit => match key.code {
                KeyCode::Enter if self.form.is_ready_to_submit() => Action::Submit,
                _ => Action::None,
            },
        }
    }

    fn handle_unit_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => self.picker.select_prev(),
            KeyCode::Down => self.picker.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(unit) = self.picker.highlighted_unit() {
                    let id = unit.id.clone();
                    self.form.select_unit(id);
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_arrival_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(ch) => {
                if let Some(next) = ARRIVAL_RULES.push(self.form.arrival(), ch) {
                    self.form.set_arrival_time(next);
                }
            }
            KeyCode::Backspace => {
                let next = ARRIVAL_RULES.pop(self.form.arrival());
                self.form.set_arrival_time(next);
            }
            _ => {}
        }
        Action::None
    }
}

/// Renders the depot supervisor screen.
#[mutants::skip]
pub fn draw_depo_form(state: &DepoFormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Dashboard Pengawas Depo | Validasi Dokumen & Segel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [
        unit_area,
        arrival_area,
        uploads_area,
        checklist_area,
        button_area,
        _spacer,
        footer_area,
    ] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let form = state.form();
    let focus = state.focus();

    draw_unit_picker(
        state.picker(),
        form.selected_unit_id(),
        focus == Focus::Unit,
        frame,
        unit_area,
    );

    draw_text_input(
        "Waktu Tiba Segel",
        form.arrival(),
        "YYYY-MM-DDTHH:MM",
        focus == Focus::Arrival,
        frame,
        arrival_area,
    );

    let upload_rows =
        Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(uploads_area);
    for (row, pair) in upload_rows.iter().zip(UploadField::ALL.chunks(2)) {
        let cols = Layout::horizontal([Constraint::Percentage(50); 2]).split(*row);
        for (col, &field) in cols.iter().zip(pair) {
            draw_upload_card(
                field,
                form.uploads().is_uploaded(field),
                focus == Focus::Upload(field),
                frame,
                *col,
            );
        }
    }

    draw_checklist(form, frame, checklist_area);

    let ready = form.is_ready_to_submit();
    let (label, button_style) = if ready {
        (
            SUBMIT_READY_LABEL,
            Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            SUBMIT_BLOCKED_LABEL,
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        )
    };
    let button_border = if focus == Focus::Submit {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let button = Paragraph::new(Line::from(label))
        .style(button_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(button_border)),
        );
    frame.render_widget(button, button_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  ↑/↓: unit  Enter: select/upload/submit  F5: reload units  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::UploadState;
    use crate::notify::Notification;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn shift_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn roster() -> Vec<Unit> {
        vec![
            Unit::new("U-12", "DT-012", "Budi"),
            Unit::new("U-7", "DT-007", "Sari"),
        ]
    }

    fn make_state() -> DepoFormState {
        let mut state = DepoFormState::new();
        state.set_units(roster());
        state
    }

    fn type_string(state: &mut DepoFormState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn focus_on(state: &mut DepoFormState, target: Focus) {
        while state.focus() != target {
            state.handle_key(press(KeyCode::Tab));
        }
    }

    /// Selects U-12, types an arrival time, and marks every upload.
    fn fill_ready(state: &mut DepoFormState) {
        state.handle_key(press(KeyCode::Enter));
        focus_on(state, Focus::Arrival);
        type_string(state, "2024-05-01T08:30");
        let mut sink: Vec<Notification> = Vec::new();
        for field in UploadField::ALL {
            state.form_mut().mark_uploaded(field, &mut sink);
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn starts_on_unit() {
            assert_eq!(DepoFormState::new().focus(), Focus::Unit);
        }

        #[test]
        fn tab_cycles_through_every_zone() {
            let mut state = make_state();
            let mut seen = vec![state.focus()];
            for _ in 0..FOCUS_ORDER.len() {
                state.handle_key(press(KeyCode::Tab));
                seen.push(state.focus());
            }
            assert_eq!(&seen[..7], &FOCUS_ORDER[..]);
            assert_eq!(seen[7], Focus::Unit);
        }

        #[test]
        fn backtab_wraps_to_submit() {
            let mut state = make_state();
            state.handle_key(shift_press(KeyCode::BackTab));
            assert_eq!(state.focus(), Focus::Submit);
        }

        #[test]
        fn next_then_prev_is_identity() {
            for focus in FOCUS_ORDER {
                assert_eq!(focus.next().prev(), focus);
            }
        }
    }

    mod unit_selection {
        use super::*;

        #[test]
        fn enter_selects_highlighted_unit() {
            let mut state = make_state();
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(state.form().selected_unit_id(), "U-12");
        }

        #[test]
        fn down_then_space_selects_second_unit() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Char(' ')));
            assert_eq!(state.form().selected_unit_id(), "U-7");
        }

        #[test]
        fn moving_highlight_alone_does_not_select() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.form().selected_unit_id(), "");
        }

        #[test]
        fn enter_with_no_units_is_noop() {
            let mut state = DepoFormState::new();
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.form().selected_unit_id(), "");
        }

        #[test]
        fn reload_without_selected_unit_deselects() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Enter));
            state.set_units(vec![Unit::new("U-12", "DT-012", "Budi")]);
            assert_eq!(state.form().selected_unit_id(), "");
        }

        #[test]
        fn reload_keeping_selected_unit_preserves_it() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Enter));
            state.set_units(roster());
            assert_eq!(state.form().selected_unit_id(), "U-12");
        }
    }

    mod arrival {
        use super::*;

        #[test]
        fn typing_sets_arrival_time() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Arrival);
            type_string(&mut state, "2024-05-01T08:30");
            assert_eq!(state.form().arrival(), "2024-05-01T08:30");
        }

        #[test]
        fn foreign_chars_are_dropped() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Arrival);
            type_string(&mut state, "2024/05 x");
            assert_eq!(state.form().arrival(), "202405");
        }

        #[test]
        fn length_is_capped() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Arrival);
            type_string(&mut state, "2024-05-01T08:30:15999");
            assert_eq!(state.form().arrival(), "2024-05-01T08:30:15");
        }

        #[test]
        fn backspace_deletes_last_char() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Arrival);
            type_string(&mut state, "2024");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.form().arrival(), "202");
        }

        #[test]
        fn typing_elsewhere_does_not_edit_arrival() {
            let mut state = make_state();
            type_string(&mut state, "2024");
            assert_eq!(state.form().arrival(), "");
        }
    }

    mod uploads {
        use super::*;

        #[test]
        fn enter_on_slot_requests_mark() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Upload(UploadField::Sib));
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::MarkUploaded(UploadField::Sib));
        }

        #[test]
        fn space_on_slot_requests_mark() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Upload(UploadField::P2h));
            let action = state.handle_key(press(KeyCode::Char(' ')));
            assert_eq!(action, Action::MarkUploaded(UploadField::P2h));
        }

        #[test]
        fn slot_does_not_change_state_by_itself() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Upload(UploadField::Segel));
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.form().uploads(), UploadState::default());
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn disabled_button_is_noop() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Submit);
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
        }

        #[test]
        fn ready_button_submits() {
            let mut state = make_state();
            fill_ready(&mut state);
            focus_on(&mut state, Focus::Submit);
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::Submit);
        }

        #[test]
        fn on_submitted_refocuses_unit() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Submit);
            state.on_submitted();
            assert_eq!(state.focus(), Focus::Unit);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn esc_quits() {
            let mut state = make_state();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }

        #[test]
        fn esc_quits_from_arrival_too() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Arrival);
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }

        #[test]
        fn unhandled_key_returns_none() {
            let mut state = make_state();
            assert_eq!(state.handle_key(press(KeyCode::F(9))), Action::None);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(state: &DepoFormState) -> String {
            let backend = TestBackend::new(110, 30);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_depo_form(state, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_sections() {
            let output = render(&make_state());
            assert!(output.contains("Dashboard Pengawas Depo"));
            assert!(output.contains("Pilih Unit Transport"));
            assert!(output.contains("Waktu Tiba Segel"));
            assert!(output.contains("Foto Kondisi Segel"));
            assert!(output.contains("Status Validasi"));
            assert!(output.contains("Unit Dipilih"));
        }

        #[test]
        fn renders_blocked_button_when_incomplete() {
            let output = render(&make_state());
            assert!(output.contains("Lengkapi Semua Dokumen"));
            assert!(!output.contains("Notifikasi GL PAMA"));
        }

        #[test]
        fn renders_ready_button_when_complete() {
            let mut state = make_state();
            fill_ready(&mut state);
            let output = render(&state);
            assert!(output.contains("Lanjutkan MSF & Notifikasi GL PAMA"));
            assert!(output.contains("Uploaded"));
        }

        #[test]
        fn renders_typed_arrival() {
            let mut state = make_state();
            focus_on(&mut state, Focus::Arrival);
            type_string(&mut state, "2024-05-01T08:30");
            let output = render(&state);
            assert!(output.contains("2024-05-01T08:30"));
        }
    }
}
