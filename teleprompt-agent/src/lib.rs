use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// The interface for anything that can answer a viewer's question.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn ask(&self, question: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// Direct HTTP client for the remote agent endpoint.
/// One unary request/response call per question. No retry, no backoff.
pub struct AgentClient {
    http: Client,
    endpoint: String,
}

impl std::fmt::Debug for AgentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl AgentClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Cut a long error body down to at most `limit` bytes without
/// splitting a multibyte character.
pub fn truncate_utf8(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Pull the reply text out of a response body.
///
/// Deployed backends have answered under different names over time, so
/// the first field that holds a string wins.
pub fn extract_reply(body: &Value) -> Option<String> {
    ["answer", "reply", "response", "message"]
        .iter()
        .find_map(|field| body[*field].as_str())
        .map(|s| s.trim().to_string())
}

#[async_trait]
impl ChatBackend for AgentClient {
    async fn ask(&self, question: &str) -> Result<String> {
        debug!("asking agent at {}", self.endpoint);

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&AskRequest { question })
            .send()
            .await
            .context("Failed to contact agent")?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "Agent returned {}: {}",
                status,
                truncate_utf8(&text, 200)
            ));
        }

        let parsed: Value = serde_json::from_str(&text).context("Agent reply was not JSON")?;

        extract_reply(&parsed).context("Agent reply had no answer field")
    }
}
