//! Submission lifecycle: validate, save, and fan the outcome out to the form.

use tracing::{debug, info, warn};

use crate::client::{SaveError, ValuationService};
use crate::model::{
    Field, FormFields, SavedValuation, ValidationErrors, ValuationPayload, validate,
};

use super::mode::EntryMode;
use super::notify::Notification;

/// Notification raised when a save succeeds.
pub const SAVED_NOTICE: &str = "Valuation saved ✓";
/// Global error after the service rejects individual fields.
pub const FIX_ERRORS_MESSAGE: &str = "Please fix validation errors and resubmit.";
/// Global error when the service could not be reached.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error while saving valuation";

/// Where the current entry is in its save lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing sent yet.
    #[default]
    Idle,
    /// A save request is in flight.
    Saving,
    /// The last attempt stored the valuation under this id.
    Succeeded(String),
    /// The last attempt failed for this reason.
    Failed(String),
}

/// Owns the form's values, errors, and submission state.
///
/// [`begin_submit`](Self::begin_submit) and [`finish_submit`](Self::finish_submit)
/// split a submission around the network call so the caller decides where the
/// request runs; [`submit`](Self::submit) does both in one `await`.
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    fields: FormFields,
    errors: ValidationErrors,
    global_error: Option<String>,
    state: SubmissionState,
    saved: Option<SavedValuation>,
    mode: EntryMode,
}

impl SubmissionController {
    /// Creates a controller with an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Current field-scoped errors.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Current submission-level error, if any.
    pub fn global_error(&self) -> Option<&str> {
        self.global_error.as_deref()
    }

    /// Current submission state.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Current entry mode.
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// The identifier of the last successful save of this entry.
    pub fn saved_id(&self) -> Option<&str> {
        self.saved.as_ref().map(|s| s.id.as_str())
    }

    /// The last successful save of this entry.
    pub fn saved(&self) -> Option<&SavedValuation> {
        self.saved.as_ref()
    }

    /// Returns `true` while a save request is in flight.
    pub fn is_saving(&self) -> bool {
        self.state == SubmissionState::Saving
    }

    /// Inputs (and the submit action) are disabled while saving and after a
    /// successful save until a new entry is started.
    pub fn inputs_enabled(&self) -> bool {
        !matches!(
            self.state,
            SubmissionState::Saving | SubmissionState::Succeeded(_)
        )
    }

    /// Preview and download are offered only right after a successful save of
    /// this entry.
    pub fn post_save_actions_available(&self) -> bool {
        self.mode == EntryMode::ReadOnlyAfterSave
            && matches!(self.state, SubmissionState::Succeeded(_))
            && self.saved.is_some()
    }

    /// The id to request reports for, when post-save actions are available.
    pub fn report_id(&self) -> Option<&str> {
        if self.post_save_actions_available() {
            self.saved_id()
        } else {
            None
        }
    }

    /// Replaces the value of `field` and clears its error.
    ///
    /// Returns `false` (and changes nothing) while inputs are disabled.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.edit(field, |fields| fields.set(field, value))
    }

    /// Appends `ch` to `field` and clears its error.
    pub fn push_char(&mut self, field: Field, ch: char) -> bool {
        self.edit(field, |fields| fields.push_char(field, ch))
    }

    /// Deletes the last character of `field` and clears its error.
    pub fn pop_char(&mut self, field: Field) -> bool {
        self.edit(field, |fields| fields.pop_char(field))
    }

    fn edit(&mut self, field: Field, apply: impl FnOnce(&mut FormFields)) -> bool {
        if !self.inputs_enabled() {
            return false;
        }
        apply(&mut self.fields);
        self.errors.clear_field(field);
        true
    }

    /// Starts a submission.
    ///
    /// Returns the payload to send, or `None` when no request should be made:
    /// a save is already in flight, the entry is read-only after a success, or
    /// client validation failed (errors are then populated).
    pub fn begin_submit(&mut self) -> Option<ValuationPayload> {
        if !self.inputs_enabled() {
            debug!(state = ?self.state, "submit ignored");
            return None;
        }

        self.global_error = None;
        self.errors.clear();

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            info!(count = errors.len(), "client validation failed");
            self.errors = errors;
            return None;
        }

        let payload = match ValuationPayload::from_fields(&self.fields) {
            Ok(payload) => payload,
            Err(e) => {
                self.errors.insert(Field::CarpetArea, e.to_string());
                return None;
            }
        };

        self.state = SubmissionState::Saving;
        self.mode = EntryMode::ReadOnlyAfterSave;
        info!("saving valuation");
        Some(payload)
    }

    /// Applies the result of the save started by [`begin_submit`](Self::begin_submit).
    ///
    /// Returns the notification summarizing the outcome, or `None` if no save
    /// was in flight (the result is discarded).
    pub fn finish_submit(
        &mut self,
        result: Result<SavedValuation, SaveError>,
    ) -> Option<Notification> {
        if !self.is_saving() {
            warn!(state = ?self.state, "discarding save result; no save in flight");
            return None;
        }

        let notification = match result {
            Ok(saved) => {
                info!(id = %saved.id, "valuation saved");
                self.fields.reset();
                self.errors.clear();
                self.global_error = None;
                self.state = SubmissionState::Succeeded(saved.id.clone());
                self.saved = Some(saved);
                Notification::success(SAVED_NOTICE)
            }
            Err(SaveError::Validation(errors)) => {
                info!(count = errors.len(), "service rejected fields");
                self.errors = errors;
                self.fail(FIX_ERRORS_MESSAGE.to_string());
                Notification::error("Validation failed")
            }
            Err(SaveError::Rejected { status, detail }) => {
                warn!(status, %detail, "save rejected");
                self.fail(format!("Failed to save valuation: {detail}"));
                Notification::error("Save failed")
            }
            Err(SaveError::Network(e)) => {
                warn!(error = %e, "save did not reach the service");
                self.fail(NETWORK_ERROR_MESSAGE.to_string());
                Notification::error("Network error")
            }
        };
        Some(notification)
    }

    fn fail(&mut self, message: String) {
        self.global_error = Some(message.clone());
        self.state = SubmissionState::Failed(message);
    }

    /// Validates, saves through `service`, and applies the outcome.
    ///
    /// Returns `None` when no request was made.
    pub async fn submit<S: ValuationService>(&mut self, service: &S) -> Option<Notification> {
        let payload = self.begin_submit()?;
        let result = service.save(&payload).await;
        self.finish_submit(result)
    }

    /// Discards the current entry and returns to editing.
    ///
    /// Refused while a save is in flight.
    pub fn start_new_entry(&mut self) -> bool {
        if self.is_saving() {
            debug!("new entry refused while saving");
            return false;
        }
        *self = Self::new();
        info!("started new entry");
        true
    }
}
