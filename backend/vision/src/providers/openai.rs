use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::info;

use shelfscan_core::VisionClient;

use crate::prompt::EXTRACTION_PROMPT;

/// OpenAI provider (chat completions API).
pub struct OpenAiVision {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiVision {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VisionClient for OpenAiVision {
    fn name(&self) -> &str {
        "openai"
    }

    async fn analyze(&self, png_bytes: &[u8]) -> Result<String> {
        info!(model = %self.model, bytes = png_bytes.len(), "Analyzing image via OpenAI");
        let b64 = STANDARD.encode(png_bytes);
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": EXTRACTION_PROMPT },
                    { "type": "image_url",
                      "image_url": { "url": format!("data:image/png;base64,{}", b64) } }
                ]
            }],
            "max_tokens": 2048,
            "temperature": 0.1
        });
        let resp = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("OpenAI request failed")?;
        if !resp.status().is_success() {
            bail!("OpenAI vision error: {}", resp.text().await.unwrap_or_default());
        }
        let json: serde_json::Value = resp.json().await?;
        Ok(json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string())
    }
}
