//! Form interaction state: submission lifecycle, entry mode, tabs, and
//! transient notifications.

pub mod mode;
pub mod notify;
pub mod submission;

pub use mode::{EntryMode, Tab, TabState};
pub use notify::{DEFAULT_DURATION, Notification, NotificationQueue, Severity};
pub use submission::{SubmissionController, SubmissionState};
