// Adapters layer: concrete implementations of the domain ports.

pub mod emailjs;
pub mod notifier;

pub use emailjs::EmailJsRelay;
pub use notifier::{LogNotifier, RecordingNotifier};
