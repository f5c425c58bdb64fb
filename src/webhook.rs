use log::{error, warn};
use serde::Serialize;

use crate::config::WebhookConfig;
use crate::embed::DiscordEmbed;
use crate::errors::*;
use crate::transport::{HttpTransport, Transport};

/// The wire shape POSTed to the webhook endpoint. Keys whose value was
/// empty or absent are skipped per key rather than serialized as null.
#[derive(Serialize, Debug, Clone)]
struct WebhookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    embeds: Vec<DiscordEmbed>,
}

impl WebhookPayload {
    fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.username.is_none()
            && self.avatar_url.is_none()
            && self.embeds.is_empty()
    }
}

/// One outgoing webhook message: destination URL, optional display
/// overrides, optional text content, and an ordered list of embeds.
///
/// Created per message, mutated through its fluent setters, and discarded
/// after [`send`](Self::send) returns.
#[derive(Debug, Clone)]
pub struct WebhookMessage {
    url: String,
    username: String,
    avatar_url: String,
    content: Option<String>,
    embeds: Vec<DiscordEmbed>,
}

impl WebhookMessage {
    /// Create a message for the given URL, falling back to the configured
    /// default when no explicit URL is provided. Fails with
    /// [`ErrorKind::MissingWebhookUrl`] before any network activity if
    /// neither resolves to a non-empty URL.
    pub fn new(url: Option<&str>, config: &WebhookConfig) -> Result<Self> {
        let url = url
            .map(str::to_owned)
            .or_else(|| config.default_webhook_url.clone())
            .unwrap_or_default();

        if url.is_empty() {
            return Err(ErrorKind::MissingWebhookUrl.into());
        }

        Ok(Self {
            url,
            username: config.default_username.clone(),
            avatar_url: config.default_avatar_url.clone(),
            content: None,
            embeds: Vec::new(),
        })
    }

    /// Convenience factory, equivalent to [`new`](Self::new).
    pub fn make(url: Option<&str>, config: &WebhookConfig) -> Result<Self> {
        Self::new(url, config)
    }

    /// Create a message using defaults loaded from the environment.
    pub fn from_env(url: Option<&str>) -> Result<Self> {
        Self::new(url, &WebhookConfig::from_env())
    }

    /// Override the display username for this message.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Override the avatar URL for this message.
    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }

    /// Set the plain text content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Append a pre-built embed.
    pub fn add_embed(mut self, embed: DiscordEmbed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Append an embed built in place by a configurator. The closure
    /// receives a fresh builder and runs exactly once, synchronously,
    /// before this method returns:
    ///
    /// ```no_run
    /// # use discord_webhooks::{WebhookConfig, WebhookMessage};
    /// # let config = WebhookConfig::default();
    /// let message = WebhookMessage::new(Some("https://discord.com/api/webhooks/1/x"), &config)
    ///     .unwrap()
    ///     .add_embed_with(|e| e.title("Deploy finished").color(0x57F287));
    /// ```
    pub fn add_embed_with<F>(self, configurator: F) -> Self
    where
        F: FnOnce(DiscordEmbed) -> DiscordEmbed,
    {
        self.add_embed(configurator(DiscordEmbed::new()))
    }

    fn payload(&self) -> WebhookPayload {
        WebhookPayload {
            content: self.content.clone().filter(|c| !c.is_empty()),
            username: Some(self.username.clone()).filter(|u| !u.is_empty()),
            avatar_url: Some(self.avatar_url.clone()).filter(|a| !a.is_empty()),
            embeds: self.embeds.clone(),
        }
    }

    /// Send the message over the default HTTP transport.
    pub async fn send(&self) -> bool {
        self.send_with(&HttpTransport::new()).await
    }

    /// Send the message over the given transport. Returns `true` iff the
    /// POST completed with a 2xx status. An empty payload aborts without a
    /// network call, and transport errors are logged rather than
    /// propagated; both report `false`.
    pub async fn send_with(&self, transport: &dyn Transport) -> bool {
        let payload = self.payload();
        if payload.is_empty() {
            warn!("Discord webhook payload is empty. At least content or embeds must be set.");
            return false;
        }

        let body = match serde_json::to_value(&payload) {
            Ok(body) => body,
            Err(err) => {
                error!("Failed to serialize Discord webhook payload: {}", err);
                return false;
            }
        };

        match transport.post_json(&self.url, &body).await {
            Ok(status) if status.is_success() => true,
            Ok(status) => {
                warn!("Discord webhook returned non-success status: {}", status);
                false
            }
            Err(err) => {
                error!("Failed to send Discord webhook: {}", err);
                false
            }
        }
    }
}
