//! Contact form and its submission collaborator.
//!
//! A submission is a single atomic request: there is no retry and no partial
//! success. On success the form is cleared; on failure every field is kept
//! so the visitor can resubmit.

use crate::model::{ContactPayload, RequestType};
use thiserror::Error;
use tracing::{info, warn};

/// Message shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thanks! We'll be in touch shortly.";

/// Message shown when the endpoint rejects the submission.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Why the endpoint refused a submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The service answered with an error.
    #[error("submission rejected ({status}): {reason}")]
    Rejected {
        /// Status code reported by the service.
        status: u16,
        /// Service-provided reason.
        reason: String,
    },
    /// The request never reached the service.
    #[error("submission failed: {0}")]
    Transport(String),
}

/// Contact form errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    /// A required field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The endpoint refused the submission.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// The form-submission service.
pub trait ContactEndpoint {
    /// Send the payload.
    fn submit(&mut self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

/// Endpoint that records submissions in the log instead of sending them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEndpoint;

impl ContactEndpoint for LogEndpoint {
    fn submit(&mut self, payload: &ContactPayload) -> Result<(), SubmitError> {
        info!(
            name = %payload.name,
            email = %payload.email,
            request_type = %payload.request_type,
            "Contact request (not sent)"
        );
        Ok(())
    }
}

/// Where submission outcomes are reported.
pub trait Notifier {
    /// Report success.
    fn success(&mut self, message: &str);
    /// Report failure.
    fn error(&mut self, message: &str);
}

/// Editable form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender's full name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Organisation (optional).
    pub company: String,
    /// Phone number.
    pub phone: String,
    /// Free-form message.
    pub message: String,
    /// Selected request kind.
    pub request_type: RequestType,
}

impl ContactForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every field is at its initial value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check required fields and build the payload.
    pub fn validate(&self) -> Result<ContactPayload, ContactError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        Ok(ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
            request_type: self.request_type,
        })
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validate, submit and report.
///
/// Success clears the form and notifies success once. Any failure notifies an
/// error and leaves the form untouched.
pub fn submit(
    form: &mut ContactForm,
    endpoint: &mut dyn ContactEndpoint,
    notifier: &mut dyn Notifier,
) -> Result<(), ContactError> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(err) => {
            notifier.error(&err.to_string());
            return Err(err);
        }
    };

    match endpoint.submit(&payload) {
        Ok(()) => {
            info!(request_type = %payload.request_type, "Contact request submitted");
            form.reset();
            notifier.success(SUCCESS_MESSAGE);
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "Contact request failed");
            notifier.error(FAILURE_MESSAGE);
            Err(err.into())
        }
    }
}
