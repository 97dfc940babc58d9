//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::client::ReportKind;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these because they need resources it owns: the
/// valuation service, the report opener, and the notification queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Validate and send the current entry.
    Submit,
    /// Open a report for the saved valuation.
    OpenReport(ReportKind),
    /// Discard the current entry and start a fresh one.
    NewEntry,
    /// Move keyboard focus from the screen to the tab bar.
    FocusTabs,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
