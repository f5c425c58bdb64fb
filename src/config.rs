use std::env;

use dotenv::dotenv;

pub const ENV_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const ENV_USERNAME: &str = "DISCORD_WEBHOOK_USERNAME";
pub const ENV_AVATAR_URL: &str = "DISCORD_WEBHOOK_AVATAR_URL";

/// Process-wide defaults for webhook messages.
///
/// Passed explicitly into [`crate::WebhookMessage::new`] so the core stays
/// testable without touching the environment. The URL has no built-in
/// fallback; username and avatar may be empty, meaning "not set".
#[derive(Debug, Clone, Default)]
pub struct WebhookConfig {
    pub default_webhook_url: Option<String>,
    pub default_username: String,
    pub default_avatar_url: String,
}

impl WebhookConfig {
    /// Load the defaults from the environment, reading a `.env` file first
    /// if one is present.
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            default_webhook_url: env::var(ENV_WEBHOOK_URL).ok().filter(|v| !v.is_empty()),
            default_username: env::var(ENV_USERNAME).unwrap_or_default(),
            default_avatar_url: env::var(ENV_AVATAR_URL).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_url() {
        let config = WebhookConfig::default();
        assert!(config.default_webhook_url.is_none());
        assert!(config.default_username.is_empty());
        assert!(config.default_avatar_url.is_empty());
    }
}
