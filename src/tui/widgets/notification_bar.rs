//! Notification bar widget: one-line display of the latest notification.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::notify::{Notification, NotificationLevel, Notifier};

/// Holds the most recent notification for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationBar {
    current: Option<Notification>,
}

impl NotificationBar {
    /// Creates an empty notification bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notification currently shown, if any.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

impl Notifier for NotificationBar {
    /// Replaces whatever is currently shown.
    fn notify(&mut self, notification: Notification) {
        self.current = Some(notification);
    }
}

/// Renders the notification bar.
///
/// Display format: `✔ message` in Green for success, `✘ message` in Red for
/// errors. Renders nothing when there is no notification.
#[mutants::skip]
pub fn draw_notification_bar(bar: &NotificationBar, frame: &mut Frame, area: Rect) {
    let Some(notification) = bar.current() else {
        return;
    };

    let (icon, color) = match notification.level {
        NotificationLevel::Success => ("✔", Color::Green),
        NotificationLevel::Error => ("✘", Color::Red),
    };
    let line = Line::from(Span::styled(
        format!("{icon} {}", notification.message),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
