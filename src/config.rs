//! Service configuration
//!
//! Read once from the process environment at startup and passed by value
//! into the assessment service. Nothing reads the environment after that.

use std::env;
use tracing::warn;

use crate::error::AssessmentError;
use crate::Result;

pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_COMPLETION_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "health-assessment-service/0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Which response-generation path the assessment service runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Forward input to the completion API.
    Remote,
    /// Keyword classification and templated reports, no network.
    Local,
}

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub strategy: Strategy,
    pub completion: CompletionConfig,
    pub geocoder: GeocoderConfig,
    pub port: u16,
}

impl AppConfig {
    /// Build configuration from environment variables.
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        let use_mock = match env::var("USE_MOCK_RESPONSE") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                AssessmentError::Config(format!(
                    "USE_MOCK_RESPONSE must be true or false, got '{}'",
                    value
                ))
            })?,
            Err(_) => false,
        };

        let port = env::var("PORT")
            .or_else(|_| env::var("API_PORT"))
            .ok()
            .map(|p| {
                p.parse::<u16>()
                    .map_err(|e| AssessmentError::Config(format!("Invalid port '{}': {}", p, e)))
            })
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        let config = Self {
            strategy: if use_mock { Strategy::Local } else { Strategy::Remote },
            completion: CompletionConfig {
                api_key: env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
                model: env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                base_url: env::var("ANTHROPIC_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_COMPLETION_URL.to_string()),
            },
            geocoder: GeocoderConfig {
                base_url: env::var("GEOCODER_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                api_key: env::var("GEOCODER_API_KEY").ok().filter(|k| !k.trim().is_empty()),
                user_agent: env::var("GEOCODER_USER_AGENT")
                    .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            },
            port,
        };

        if config.strategy == Strategy::Remote && config.completion.api_key.is_empty() {
            warn!(
                "ANTHROPIC_API_KEY not set and USE_MOCK_RESPONSE is false; \
                 remote assessments will report a configuration failure"
            );
        }

        Ok(config)
    }

    /// Configuration for the local strategy with default endpoints.
    pub fn local() -> Self {
        Self {
            strategy: Strategy::Local,
            completion: CompletionConfig {
                api_key: String::new(),
                model: DEFAULT_MODEL.to_string(),
                base_url: DEFAULT_COMPLETION_URL.to_string(),
            },
            geocoder: GeocoderConfig {
                base_url: DEFAULT_GEOCODER_URL.to_string(),
                api_key: None,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
            port: DEFAULT_PORT,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 1 "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_local_defaults() {
        let config = AppConfig::local();
        assert_eq!(config.strategy, Strategy::Local);
        assert_eq!(config.completion.model, DEFAULT_MODEL);
        assert!(config.geocoder.api_key.is_none());
    }
}
