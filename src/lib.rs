//! Builder and sender for Discord incoming-webhook messages.
//!
//! A [`WebhookMessage`] collects text content and [`DiscordEmbed`] blocks,
//! then [`send`](WebhookMessage::send)s them as a single JSON POST to the
//! webhook URL, reporting a boolean outcome.

mod config;
mod embed;
mod errors;
mod transport;
mod webhook;

pub use config::{WebhookConfig, ENV_AVATAR_URL, ENV_USERNAME, ENV_WEBHOOK_URL};
pub use embed::{DiscordEmbed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage};
pub use errors::{Error, ErrorKind, Result};
pub use transport::{HttpTransport, Transport};
pub use webhook::WebhookMessage;
