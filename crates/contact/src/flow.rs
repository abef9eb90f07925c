use validator::Validate;

use crate::{
    Error, FormField, FormState, Relay, RelayPayload, RelaySettings, Result, Subject,
};

pub const SUBJECT_REQUIRED: &str = "Please select a service from the dropdown.";
pub const SUBMISSION_FAILED: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// One visitor's pass through the contact form.
///
/// ```text
/// idle --submit--> (validate) --invalid--> error
///                             --valid----> loading --accepted--> success --reset--> idle
///                                                  --rejected--> error   --submit--> ...
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    form: FormState,
    status: Status,
}

impl ContactFlow {
    /// Enters the flow, pre-filling the subject from the page's `subject`
    /// query parameter.
    pub fn enter(subject_param: Option<&str>) -> Self {
        Self {
            form: FormState::with_subject_param(subject_param),
            status: Status::Idle,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Status::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Back to `idle` with the same defaults as a first visit without query.
    pub fn reset(&mut self) {
        self.form = FormState::default();
        self.status = Status::Idle;
    }

    pub fn validate(&self) -> Result<Subject> {
        let Some(subject) = self.form.subject else {
            return Err(Error::Validation(SUBJECT_REQUIRED.to_owned()));
        };

        self.form.validate()?;

        Ok(subject)
    }

    /// Validates, sends the form once and records the outcome.
    ///
    /// Ignored while a submission is in flight or after success; the visitor
    /// has to reset first to send another message.
    pub async fn submit<R>(&mut self, relay: &R, settings: &RelaySettings) -> &Status
    where
        R: Relay + ?Sized,
    {
        if matches!(self.status, Status::Loading | Status::Success) {
            tracing::debug!(status = ?self.status, "contact submit ignored");

            return &self.status;
        }

        let subject = match self.validate() {
            Ok(subject) => subject,
            Err(err) => {
                tracing::debug!(error = %err, "contact form rejected before sending");
                self.status = Status::Error(err.to_string());

                return &self.status;
            }
        };

        self.status = Status::Loading;

        let payload = RelayPayload::new(&self.form, subject, settings);

        match deliver(relay, &payload).await {
            Ok(()) => {
                tracing::info!(subject = %subject, "contact form delivered");
                self.form = FormState::default();
                self.status = Status::Success;
            }
            Err(err) => {
                tracing::warn!(subject = %subject, error = %err, "contact form not delivered");
                self.status = Status::Error(err.to_string());
            }
        }

        &self.status
    }
}

async fn deliver<R: Relay + ?Sized>(relay: &R, payload: &RelayPayload) -> Result<()> {
    match relay.send(payload).await {
        Ok(reply) if reply.success => Ok(()),
        Ok(reply) => {
            let message = reply
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| SUBMISSION_FAILED.to_owned());

            Err(Error::Submission(message))
        }
        Err(err) => {
            tracing::error!("{err}");

            Err(Error::Submission(SUBMISSION_FAILED.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_starts_idle() {
        let flow = ContactFlow::enter(Some("QA Audit"));
        assert_eq!(flow.status(), &Status::Idle);
        assert_eq!(flow.form().subject, Some(Subject::QaAudit));
        assert!(!flow.is_submit_disabled());
        assert_eq!(flow.error_message(), None);
    }

    #[test]
    fn missing_subject_is_reported_before_other_fields() {
        let flow = ContactFlow::default();
        assert_eq!(
            flow.validate(),
            Err(Error::Validation(SUBJECT_REQUIRED.to_owned()))
        );
    }

    #[test]
    fn reset_forgets_prefilled_subject() {
        let mut flow = ContactFlow::enter(Some("QA Audit"));
        flow.set(FormField::Name, "Jane");
        flow.reset();
        assert_eq!(flow, ContactFlow::enter(None));
        assert_eq!(flow.form(), &FormState::default());
    }
}
