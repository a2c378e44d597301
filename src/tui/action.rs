//! Actions returned by screen event handlers.

use crate::model::UploadField;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to run anything that needs the store or the
/// notification bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// A file was chosen for the given photo slot.
    MarkUploaded(UploadField),
    /// Continue MSF with the current form.
    Submit,
    /// Reload the unit list from the provider.
    ReloadUnits,
    /// Quit the application.
    Quit,
}
