use crate::config::RelayConfig;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub relay: RelayConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn verbose(&self) -> bool {
        matches!(
            self.level.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("debug") | Some("trace")
        )
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，先替換 ${VAR} 形式的環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = validation::substitute_env_vars(content);

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        tracing::debug!(
            endpoint = %config.relay.endpoint,
            service_id = %config.relay.service_id,
            "Loaded site configuration"
        );

        Ok(config)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.relay.validate()?;

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(PortfolioError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Unsupported level. Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = SiteConfig::from_toml_str(
            r#"
[relay]
service_id = "gmail"
template_id = "template_jxal6oi"
public_key = "pk_test"
"#,
        )
        .unwrap();

        assert_eq!(config.relay.service_id, "gmail");
        assert_eq!(config.relay.endpoint, crate::config::DEFAULT_RELAY_ENDPOINT);
        assert!(config.logging.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SiteConfig::from_toml_str("[relay\nservice_id = 1").unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = SiteConfig::from_toml_str(
            r#"
[relay]
service_id = "gmail"
template_id = "t"
public_key = "k"

[logging]
level = "loud"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_verbose() {
        let logging = LoggingConfig {
            level: Some("DEBUG".to_string()),
            json: None,
        };
        assert!(logging.verbose());
        assert!(!LoggingConfig::default().verbose());
    }
}
