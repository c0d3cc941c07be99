pub mod page;
pub mod scroll;
pub mod submitter;

pub use crate::domain::model::{
    ContactMessage, Notification, NotificationKind, RelayAck, ScrollBehavior, ScrollMetrics,
    Section, SubmissionState,
};
pub use crate::domain::ports::{MessageRelay, Notifier, Viewport};
pub use crate::utils::error::Result;
