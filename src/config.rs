//! # Application Configuration
//!
//! Both tokens are read from the environment at startup and validated
//! before anything connects. A missing or placeholder value is a fatal
//! configuration error, not a warning: the process refuses to start
//! rather than run half-wired.

use anyhow::{Result, bail};

/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the analytics backend token.
pub const ANALYTICS_TOKEN_VAR: &str = "TELEMETR_TOKEN";

/// Validated startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_token: String,
    pub analytics_token: String,
}

impl AppConfig {
    /// Read and validate configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let telegram_token = std::env::var(TELEGRAM_TOKEN_VAR).unwrap_or_default();
        let analytics_token = std::env::var(ANALYTICS_TOKEN_VAR).unwrap_or_default();
        Self::from_values(telegram_token, analytics_token)
    }

    /// Validate raw token values.
    pub fn from_values(telegram_token: String, analytics_token: String) -> Result<Self> {
        if !is_usable(&telegram_token) {
            bail!(
                "{} is not set. Put the bot token from @BotFather into the environment or a .env file.",
                TELEGRAM_TOKEN_VAR
            );
        }
        if !is_usable(&analytics_token) {
            bail!(
                "{} is not set. The analytics provider needs its API token even in sample mode.",
                ANALYTICS_TOKEN_VAR
            );
        }
        Ok(Self {
            telegram_token,
            analytics_token,
        })
    }
}

/// A token is usable when it is non-blank and not an obvious template
/// value left over from a sample .env file.
fn is_usable(token: &str) -> bool {
    let trimmed = token.trim();
    !trimmed.is_empty() && !trimmed.to_lowercase().contains("your")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Both tokens present and plausible.
    #[test]
    fn test_accepts_real_looking_tokens() {
        let config = AppConfig::from_values(
            "123456:ABC-DEF1234ghIkl".to_string(),
            "tm-live-9f8e7d6c".to_string(),
        );
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.telegram_token, "123456:ABC-DEF1234ghIkl");
        assert_eq!(config.analytics_token, "tm-live-9f8e7d6c");
    }

    /// Missing or blank tokens are fatal.
    #[test]
    fn test_rejects_blank_tokens() {
        assert!(AppConfig::from_values(String::new(), "tm-live".to_string()).is_err());
        assert!(AppConfig::from_values("123:abc".to_string(), "   ".to_string()).is_err());
        assert!(AppConfig::from_values(String::new(), String::new()).is_err());
    }

    /// Template values from a sample .env are rejected, not connected with.
    #[test]
    fn test_rejects_placeholder_tokens() {
        let cases = vec![
            ("your_token_here", "tm-live"),
            ("123:abc", "YOUR_TELEMETR_TOKEN"),
        ];
        for (telegram, analytics) in cases {
            assert!(
                AppConfig::from_values(telegram.to_string(), analytics.to_string()).is_err(),
                "placeholder pair ({}, {}) should be rejected",
                telegram,
                analytics
            );
        }
    }

    /// The error message names the missing variable.
    #[test]
    fn test_error_names_the_variable() {
        let err = AppConfig::from_values(String::new(), "tm-live".to_string())
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains(TELEGRAM_TOKEN_VAR));

        let err = AppConfig::from_values("123:abc".to_string(), String::new())
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains(ANALYTICS_TOKEN_VAR));
    }
}
