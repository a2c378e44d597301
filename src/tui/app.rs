use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Runtime;
use tracing::{error, info};

use crate::form::SubmitOutcome;
use crate::model::ArrivalZone;
use crate::notify::{Notification, Notifier};
use crate::storage::{DepoStore, UnitProvider};

use super::action::Action;
use super::error::AppError;
use super::screens::{DepoFormState, HelpState, draw_depo_form, draw_help};
use super::widgets::{NotificationBar, draw_notification_bar};

pub const MSG_UNITS_FAILED: &str = "Gagal memuat data unit!";

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The depot supervisor form.
    DepoForm,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    store: DepoStore,
    runtime: Runtime,
    tz: ArrivalZone,
    depo: DepoFormState,
    help: HelpState,
    notifications: NotificationBar,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on [`Screen::DepoForm`] and loads the unit list.
    ///
    /// Arrival times typed by the operator are read in `tz`.
    pub fn new(store: DepoStore, tz: ArrivalZone) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        let mut app = Self {
            screen: Screen::DepoForm,
            store,
            runtime,
            tz,
            depo: DepoFormState::new(),
            help: HelpState::new(),
            notifications: NotificationBar::new(),
            should_quit: false,
        };
        app.reload_units();
        Ok(app)
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen above a one-line notification bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, bar_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::DepoForm => draw_depo_form(&self.depo, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }
        draw_notification_bar(&self.notifications, frame, bar_area);
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match key.code {
            KeyCode::F(1) => {
                self.help.reset();
                Action::Navigate(Screen::Help)
            }
            KeyCode::F(5) => Action::ReloadUnits,
            _ => match self.screen {
                Screen::DepoForm => self.depo.handle_key(key),
                Screen::Help => self.help.handle_key(key),
            },
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::MarkUploaded(field) => {
                self.depo
                    .form_mut()
                    .mark_uploaded(field, &mut self.notifications);
            }
            Action::Submit => self.submit(),
            Action::ReloadUnits => self.reload_units(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn submit(&mut self) {
        let outcome = self.runtime.block_on(self.depo.form_mut().submit(
            &self.store,
            &mut self.notifications,
            &self.tz,
        ));
        if let SubmitOutcome::Submitted(_) = outcome {
            self.depo.on_submitted();
        }
    }

    fn reload_units(&mut self) {
        match self.runtime.block_on(self.store.list_units()) {
            Ok(units) => {
                info!(count = units.len(), "units loaded");
                self.depo.set_units(units);
            }
            Err(e) => {
                error!(error = %e, "failed to load units");
                self.notifications
                    .notify(Notification::error(MSG_UNITS_FAILED));
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the depot form screen state.
    pub fn depo(&self) -> &DepoFormState {
        &self.depo
    }

    /// Returns the notification bar.
    pub fn notifications(&self) -> &NotificationBar {
        &self.notifications
    }

    /// Returns a reference to the [`DepoStore`].
    pub fn store(&self) -> &DepoStore {
        &self.store
    }
}
