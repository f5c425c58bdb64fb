use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::errors::*;

/// The outbound HTTP collaborator: one POST of a JSON body to a URL,
/// yielding the response status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<StatusCode>;
}

/// Default transport over a `reqwest` client. No timeout override and no
/// pooling policy beyond the client's defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<StatusCode> {
        let serialized = serde_json::to_string(body)?;

        let res = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(serialized)
            .send()
            .await?;

        Ok(res.status())
    }
}
