use crate::domain::model::{ContactMessage, Notification, RelayAck, ScrollBehavior};
use crate::utils::error::RelayError;
use async_trait::async_trait;

/// Delivers a contact message to the email provider. One attempt per call.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<RelayAck, RelayError>;
}

/// User-facing notification primitive (the page's alert).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Runtime scroll actions the page can trigger.
pub trait Viewport {
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);
}

#[async_trait]
impl<T: MessageRelay + ?Sized> MessageRelay for std::sync::Arc<T> {
    async fn send(&self, message: &ContactMessage) -> Result<RelayAck, RelayError> {
        (**self).send(message).await
    }
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
