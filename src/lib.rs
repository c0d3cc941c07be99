pub mod adapters;
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{EmailJsRelay, LogNotifier, RecordingNotifier};
pub use config::{RelayConfig, SiteConfig};
pub use content::{site_content, SiteContent};
pub use crate::core::{
    page::PortfolioPage,
    scroll::{ScrollTracker, SectionLayout},
    submitter::{ContactForm, ContactFormSubmitter, IgnoreReason, SubmitOutcome},
};
pub use utils::error::{PortfolioError, RelayError, Result};
