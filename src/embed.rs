use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A single Discord embed, assembled through a fluent builder.
///
/// Only keys that were explicitly set are serialized; absent optional
/// sub-fields are omitted rather than sent as null. No validation is
/// performed at this layer: colors, URLs, and text lengths are passed
/// through verbatim and Discord's API is the ultimate validator.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscordEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl DiscordEmbed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embed title without a link.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the embed title as a link to the given URL.
    pub fn title_with_url(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.url = Some(url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the embed color as an integer (e.g. 0x3498DB for blue).
    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the embed timestamp to the given instant, rendered as ISO-8601.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp.to_rfc3339());
        self
    }

    /// Set the embed timestamp to the current instant, resolved now rather
    /// than when the embed is serialized.
    pub fn timestamp_now(self) -> Self {
        self.timestamp(Utc::now())
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: None,
        });
        self
    }

    pub fn footer_with_icon(
        mut self,
        text: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        self.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: Some(icon_url.into()),
        });
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(EmbedImage { url: url.into() });
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(EmbedImage { url: url.into() });
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            url: None,
            icon_url: None,
        });
        self
    }

    pub fn author_with_details(
        mut self,
        name: impl Into<String>,
        url: Option<String>,
        icon_url: Option<String>,
    ) -> Self {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            url,
            icon_url,
        });
        self
    }

    /// Append a name/value field. Repeated calls accumulate in insertion
    /// order; Discord's 25-field limit is not enforced here.
    pub fn add_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Render the accumulated state as a JSON mapping containing exactly
    /// the keys that were set.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_preserve_insertion_order() {
        let embed = DiscordEmbed::new()
            .add_field("first", "1", false)
            .add_field("second", "2", true)
            .add_field("third", "3", false);

        assert_eq!(embed.fields.len(), 3);
        let value = embed.to_value();
        let fields = value["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0]["name"], "first");
        assert_eq!(fields[1]["name"], "second");
        assert_eq!(fields[2]["name"], "third");
    }

    #[test]
    fn inline_false_is_serialized() {
        let embed = DiscordEmbed::new().add_field("a", "b", false);
        let value = embed.to_value();
        assert_eq!(value["fields"][0]["inline"], false);
    }

    #[test]
    fn footer_without_icon_omits_icon_url() {
        let embed = DiscordEmbed::new().footer("just text");
        let value = embed.to_value();
        assert_eq!(value["footer"]["text"], "just text");
        assert!(value["footer"].as_object().unwrap().get("icon_url").is_none());
    }

    #[test]
    fn footer_with_icon_keeps_both_keys() {
        let embed = DiscordEmbed::new().footer_with_icon("text", "https://example.com/icon.png");
        let value = embed.to_value();
        assert_eq!(value["footer"]["icon_url"], "https://example.com/icon.png");
    }

    #[test]
    fn title_without_url_omits_url_key() {
        let embed = DiscordEmbed::new().title("x");
        let value = embed.to_value();
        assert_eq!(value["title"], "x");
        assert!(value.as_object().unwrap().get("url").is_none());
    }

    #[test]
    fn title_with_url_sets_both_keys() {
        let embed = DiscordEmbed::new().title_with_url("x", "http://y");
        let value = embed.to_value();
        assert_eq!(value["title"], "x");
        assert_eq!(value["url"], "http://y");
    }

    #[test]
    fn author_drops_absent_optional_parts() {
        let embed = DiscordEmbed::new().author("someone");
        let value = embed.to_value();
        let author = value["author"].as_object().unwrap();
        assert_eq!(author["name"], "someone");
        assert!(author.get("url").is_none());
        assert!(author.get("icon_url").is_none());
    }

    #[test]
    fn empty_embed_renders_to_empty_mapping() {
        let value = DiscordEmbed::new().to_value();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn image_and_thumbnail_wrap_url() {
        let embed = DiscordEmbed::new()
            .image("https://example.com/a.png")
            .thumbnail("https://example.com/b.png");
        let value = embed.to_value();
        assert_eq!(value["image"]["url"], "https://example.com/a.png");
        assert_eq!(value["thumbnail"]["url"], "https://example.com/b.png");
    }

    #[test]
    fn timestamp_is_iso8601() {
        let instant = DateTime::parse_from_rfc3339("2023-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let embed = DiscordEmbed::new().timestamp(instant);
        assert_eq!(embed.timestamp.as_deref(), Some("2023-01-02T03:04:05+00:00"));
    }
}
