use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

/// How long the success or error status stays on screen before the form goes back to idle.
pub const STATUS_DISPLAY: Duration = Duration::from_secs(5);

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A visitor's message, as posted by the contact form.
///
/// Missing JSON fields deserialize to empty strings so that "absent" and
/// "blank" fail validation the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Todos los campos son requeridos")]
    MissingFields,
    #[error("Formato de email inválido")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl ContactMessage {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit,
    Delivered,
    Failed,
    Expired,
}

impl SubmissionState {
    /// Apply one event. Pairs with no transition leave the state as it is.
    pub fn on(self, event: SubmissionEvent) -> Self {
        use SubmissionEvent::*;
        use SubmissionState::*;
        match (self, event) {
            (Idle | Success | Error, Submit) => Sending,
            (Sending, Delivered) => Success,
            (Sending, Failed) => Error,
            (Success | Error, Expired) => Idle,
            (state, _) => state,
        }
    }
}

/// The contact form as the browser sees it: the draft being typed and where
/// the last submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactMessage,
    state: SubmissionState,
    /// Bumped on every submission; a status timer only expires its own attempt.
    attempt: u64,
}

impl ContactForm {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Returns the message to send, or `None` when a required field is blank
    /// (the browser's own required-field check would have blocked it).
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if !self.draft.is_complete() {
            return None;
        }
        self.state = self.state.on(SubmissionEvent::Submit);
        self.attempt += 1;
        Some(self.draft.clone())
    }

    /// Record the outcome of the current attempt and return its number, to be
    /// handed back to [`ContactForm::expire`] once [`STATUS_DISPLAY`] has passed.
    pub fn finish(&mut self, delivered: bool) -> u64 {
        if delivered {
            self.state = self.state.on(SubmissionEvent::Delivered);
            if self.state == SubmissionState::Success {
                self.draft = ContactMessage::default();
            }
        } else {
            self.state = self.state.on(SubmissionEvent::Failed);
        }
        self.attempt
    }

    /// Clear the status shown for `attempt`. Ignored once a newer attempt has started.
    pub fn expire(&mut self, attempt: u64) {
        if attempt == self.attempt {
            self.state = self.state.on(SubmissionEvent::Expired);
        }
    }
}
