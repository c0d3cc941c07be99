pub mod toml_config;

pub use toml_config::{LoggingConfig, SiteConfig};

use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_no_placeholder, validate_non_empty_string, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS 的三個識別碼。公開金鑰本來就會出現在前端，不當作機密處理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

fn default_endpoint() -> String {
    DEFAULT_RELAY_ENDPOINT.to_string()
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        let required = |name: &str| {
            env::var(name).map_err(|_| PortfolioError::ConfigError {
                message: format!("{} environment variable is required", name),
            })
        };

        Ok(Self {
            endpoint: env::var("EMAILJS_ENDPOINT").unwrap_or_else(|_| default_endpoint()),
            service_id: required("EMAILJS_SERVICE_ID")?,
            template_id: required("EMAILJS_TEMPLATE_ID")?,
            public_key: required("EMAILJS_PUBLIC_KEY")?,
        })
    }
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        validate_url("relay.endpoint", &self.endpoint)?;

        for (field, value) in [
            ("relay.service_id", &self.service_id),
            ("relay.template_id", &self.template_id),
            ("relay.public_key", &self.public_key),
        ] {
            validate_no_placeholder(field, value)?;
            validate_non_empty_string(field, value)?;
        }

        Ok(())
    }
}
