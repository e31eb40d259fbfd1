//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Tracing subscriber settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info,outing_match=debug,tower_http=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_enables_crate_debug() {
        let config = LoggingConfig::default();
        assert!(config.filter.contains("outing_match=debug"));
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_filter_is_rejected() {
        let config = LoggingConfig {
            filter: " ".to_string(),
            json: true,
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLogFilter));
    }
}
