//! Transient notifications with per-notification expiry timers.
//!
//! Each [`NotificationQueue::notify`] call gets a fresh id and its own timer
//! task. Superseding or dismissing a notification aborts its timer, and an
//! expiry report for an id that is no longer current is ignored, so an old
//! timer can never hide a newer notification.

use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::AbortHandle;
use tracing::{debug, warn};

/// How long a notification stays up unless told otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3800);

/// Visual tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A short status message shown over the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// A success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// An error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Debug)]
struct Live {
    id: u64,
    notification: Notification,
    timer: Option<AbortHandle>,
}

impl Live {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Holds at most one live notification.
#[derive(Debug)]
pub struct NotificationQueue {
    current: Option<Live>,
    next_id: u64,
    expired_tx: UnboundedSender<u64>,
    expired_rx: UnboundedReceiver<u64>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        let (expired_tx, expired_rx) = unbounded_channel();
        Self {
            current: None,
            next_id: 0,
            expired_tx,
            expired_rx,
        }
    }

    /// Shows `notification`, replacing any current one, and schedules its
    /// removal after `duration`.
    ///
    /// Outside a Tokio runtime no timer can be scheduled; the notification
    /// then stays until dismissed or superseded.
    pub fn notify(&mut self, notification: Notification, duration: Duration) {
        if let Some(mut previous) = self.current.take() {
            previous.cancel_timer();
        }

        let id = self.next_id;
        self.next_id += 1;

        let timer = match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let tx = self.expired_tx.clone();
                let task = handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    tx.send(id).ok();
                });
                Some(task.abort_handle())
            }
            Err(_) => {
                warn!("no runtime available; notification will not expire on its own");
                None
            }
        };

        debug!(id, message = %notification.message, ?duration, "notification shown");
        self.current = Some(Live {
            id,
            notification,
            timer,
        });
    }

    /// Removes the current notification immediately.
    pub fn dismiss(&mut self) {
        if let Some(mut live) = self.current.take() {
            live.cancel_timer();
            debug!(id = live.id, "notification dismissed");
        }
    }

    /// Applies pending expiry reports. Returns `true` if the current
    /// notification was removed.
    pub fn process_expired(&mut self) -> bool {
        let mut removed = false;
        while let Ok(id) = self.expired_rx.try_recv() {
            if self.current.as_ref().is_some_and(|live| live.id == id) {
                self.current = None;
                removed = true;
                debug!(id, "notification expired");
            }
        }
        removed
    }

    /// Returns the notification currently shown, if any.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|live| &live.notification)
    }
}

impl Drop for NotificationQueue {
    fn drop(&mut self) {
        if let Some(live) = self.current.as_mut() {
            live.cancel_timer();
        }
    }
}
