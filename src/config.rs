use std::path::{Path, PathBuf};

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::services::scheduler::Millis;
use crate::services::submission::SubmitTimings;

/// Errors raised when a landing page configuration is rejected
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error("Typewriter text must not be empty")]
    EmptyTypewriterText,
}

/// Environment variable naming a JSON file with overrides.
pub const CONFIG_PATH_VAR: &str = "LANDING_CONFIG";

/// Id of the `<script type="application/json">` the host embeds the config in.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Every tunable the page's effects read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Vertical scroll offset past which the navbar is marked `scrolled`
    pub scroll_threshold: f64,
    pub parallax_quantum_ms: Millis,
    pub parallax_strength: f64,
    pub floating_strength: f64,
    pub typewriter_text: String,
    pub typewriter_delay_ms: Millis,
    pub sending_ms: Millis,
    pub sent_ms: Millis,
    pub ripple_ms: Millis,
    pub team_flip_back_ms: Millis,
    pub portfolio_flip_back_ms: Millis,
    pub fade_in_delay_ms: Millis,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 100.0,
            parallax_quantum_ms: 16,
            parallax_strength: 30.0,
            floating_strength: 50.0,
            typewriter_text: "AURAAILYF".into(),
            typewriter_delay_ms: 150,
            sending_ms: 1500,
            sent_ms: 2000,
            ripple_ms: 600,
            team_flip_back_ms: 1000,
            portfolio_flip_back_ms: 1500,
            fade_in_delay_ms: 100,
        }
    }
}

impl LandingConfig {
    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the file named by `LANDING_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// JSON safe to place inside a `<script>` element.
    pub fn to_embedded_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallax_quantum_ms == 0 {
            return Err(ConfigError::Zero("parallax_quantum_ms"));
        }
        if self.typewriter_delay_ms == 0 {
            return Err(ConfigError::Zero("typewriter_delay_ms"));
        }
        if self.typewriter_text.is_empty() {
            return Err(ConfigError::EmptyTypewriterText);
        }
        Ok(())
    }

    pub fn submit_timings(&self) -> SubmitTimings {
        SubmitTimings {
            sending_ms: self.sending_ms,
            sent_ms: self.sent_ms,
        }
    }
}

/// Read the config provided by the host, falling back to the defaults.
pub fn use_landing_config() -> LandingConfig {
    use_context::<LandingConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = LandingConfig::from_json(r#"{ "typewriter_text": "HELLO" }"#).unwrap();
        assert_eq!(config.typewriter_text, "HELLO");
        assert_eq!(config.typewriter_delay_ms, 150);
        assert_eq!(config.parallax_quantum_ms, 16);
    }

    #[test]
    fn zero_quantum_is_rejected() {
        let err = LandingConfig::from_json(r#"{ "parallax_quantum_ms": 0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "parallax_quantum_ms must be greater than zero");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            LandingConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn file_overrides_are_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("landing.json");
        std::fs::write(&path, r#"{ "typewriter_text": "WELCOME", "sent_ms": 900 }"#).unwrap();

        let config = LandingConfig::from_path(&path).unwrap();
        assert_eq!(config.typewriter_text, "WELCOME");
        assert_eq!(config.submit_timings().sent_ms, 900);
        assert_eq!(config.sending_ms, 1500);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = LandingConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn embedded_json_cannot_close_its_script() {
        let config = LandingConfig {
            typewriter_text: "</script><b>".into(),
            ..LandingConfig::default()
        };
        let json = config.to_embedded_json().unwrap();
        assert!(!json.contains('<'));
        assert_eq!(LandingConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn submit_timings_follow_config() {
        let timings = LandingConfig::default().submit_timings();
        assert_eq!(timings.sending_ms, 1500);
        assert_eq!(timings.sent_ms, 2000);
    }
}
