use crate::domain::model::{ContactMessage, Notification, SubmissionState};
use crate::domain::ports::{MessageRelay, Notifier};
use std::sync::{Mutex, MutexGuard};

pub const SUBMIT_LABEL_IDLE: &str = "Send Message";
pub const SUBMIT_LABEL_SENDING: &str = "Sending...";

/// The four required inputs of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub const FIELD_NAMES: [&'static str; 4] = ["user_name", "user_email", "subject", "message"];

    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Sets a field by its form name. Returns `false` for unknown names.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "user_name" => &mut self.name,
            "user_email" => &mut self.email,
            "subject" => &mut self.subject,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// Required fields that are empty, in form order. Whitespace counts as a
    /// value, same as the browser's `required` attribute.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELD_NAMES
            .into_iter()
            .zip([&self.name, &self.email, &self.subject, &self.message])
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    pub fn capture(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            body: self.message.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == Self::FIELD_NAMES.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No form is mounted.
    MissingForm,
    /// The submit control is disabled while a send is outstanding.
    AlreadySending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
    /// Required fields were empty; nothing was sent.
    Blocked { missing: Vec<&'static str> },
    Ignored(IgnoreReason),
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 無論成功、失敗或 future 被丟棄，都會把狀態還原為 Idle
struct SendingGuard<'a> {
    state: &'a Mutex<SubmissionState>,
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        *lock(self.state) = SubmissionState::Idle;
    }
}

pub struct ContactFormSubmitter<R: MessageRelay, N: Notifier> {
    relay: R,
    notifier: N,
    form: Mutex<Option<ContactForm>>,
    state: Mutex<SubmissionState>,
}

impl<R: MessageRelay, N: Notifier> ContactFormSubmitter<R, N> {
    pub fn new(relay: R, notifier: N) -> Self {
        Self {
            relay,
            notifier,
            form: Mutex::new(None),
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn mount(&self, form: ContactForm) {
        *lock(&self.form) = Some(form);
    }

    pub fn unmount(&self) -> Option<ContactForm> {
        lock(&self.form).take()
    }

    pub fn is_mounted(&self) -> bool {
        lock(&self.form).is_some()
    }

    /// Edits the mounted form. Returns `None` when nothing is mounted.
    pub fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
        lock(&self.form).as_mut().map(f)
    }

    pub fn form_snapshot(&self) -> Option<ContactForm> {
        lock(&self.form).clone()
    }

    pub fn state(&self) -> SubmissionState {
        *lock(&self.state)
    }

    pub fn submit_enabled(&self) -> bool {
        self.state() == SubmissionState::Idle
    }

    pub fn submit_label(&self) -> &'static str {
        match self.state() {
            SubmissionState::Idle => SUBMIT_LABEL_IDLE,
            SubmissionState::Sending => SUBMIT_LABEL_SENDING,
        }
    }

    /// Runs one submit cycle for the mounted form.
    pub async fn submit(&self) -> SubmitOutcome {
        let message = {
            let mut state = lock(&self.state);
            if *state == SubmissionState::Sending {
                tracing::debug!("Submit ignored: a message is already being sent");
                return SubmitOutcome::Ignored(IgnoreReason::AlreadySending);
            }

            let form = lock(&self.form);
            let Some(form) = form.as_ref() else {
                tracing::debug!("Submit ignored: contact form is not mounted");
                return SubmitOutcome::Ignored(IgnoreReason::MissingForm);
            };

            let missing = form.missing_fields();
            if !missing.is_empty() {
                tracing::debug!(?missing, "Submit blocked: required fields are empty");
                return SubmitOutcome::Blocked { missing };
            }

            *state = SubmissionState::Sending;
            form.capture()
        };
        let _sending = SendingGuard { state: &self.state };

        tracing::info!("Sending contact message");

        match self.relay.send(&message).await {
            Ok(ack) => {
                tracing::info!(status = ack.status, "Contact message delivered");
                self.notifier.notify(Notification::success());
                if let Some(form) = lock(&self.form).as_mut() {
                    form.reset();
                }
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact message failed to send");
                self.notifier.notify(Notification::failure());
                SubmitOutcome::Failed
            }
        }
    }
}
