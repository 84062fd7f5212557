use crate::io_struct::{ChatMessage, LeadRecord};
use bytes::Bytes;
use serde_json::json;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub completion_url: String,
    pub model: String,
    pub completion_api_key: Option<String>,
    pub lead_sink_url: String,
    pub lead_sink_token: Option<String>,
    pub cors_allowed_origins: Vec<String>,
    pub timeout_secs: u64,
}

/// Shared per-process state: the config built at startup plus one reqwest
/// client reused for both upstreams.
#[derive(Debug, Clone)]
pub struct RelayState {
    pub config: RelayConfig,
    pub client: reqwest::Client,
}

impl RelayState {
    pub fn new(config: RelayConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Forwards the full message history to the completion provider and
    /// returns its body untouched. Any failure, including a non-2xx status,
    /// comes back as an error so the handler can serve the canned fallback.
    pub async fn complete(&self, messages: &[ChatMessage]) -> anyhow::Result<Bytes> {
        let payload = json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": 0.6,
            "max_tokens": 400,
        });
        let mut request = self.client.post(&self.config.completion_url).json(&payload);
        if let Some(key) = &self.config.completion_api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("completion provider returned {}", status);
        }
        Ok(response.bytes().await?)
    }

    /// Submits one contact record to the lead sink. The caller logs and
    /// discards the result; it never reaches the HTTP response. A missing
    /// token skips the call entirely.
    pub async fn submit_lead(&self, lead: &LeadRecord) -> anyhow::Result<()> {
        let Some(token) = &self.config.lead_sink_token else {
            anyhow::bail!("lead sink token not configured, skipping");
        };
        let response = self
            .client
            .post(&self.config.lead_sink_url)
            .bearer_auth(token)
            .json(&lead.to_payload())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("lead sink returned {}", status);
        }
        Ok(())
    }
}
