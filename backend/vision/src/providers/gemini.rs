use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::info;

use shelfscan_core::VisionClient;

use crate::prompt::EXTRACTION_PROMPT;

/// Gemini provider (generativelanguage REST API).
pub struct GeminiVision {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiVision {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VisionClient for GeminiVision {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn analyze(&self, png_bytes: &[u8]) -> Result<String> {
        info!(model = %self.model, bytes = png_bytes.len(), "Analyzing image via Gemini");
        let b64 = STANDARD.encode(png_bytes);
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [
                { "text": EXTRACTION_PROMPT },
                { "inlineData": { "mimeType": "image/png", "data": b64 } }
            ]}],
            "generationConfig": {
                "maxOutputTokens": 2048,
                "temperature": 0.1,
                "topP": 1,
                "topK": 32
            }
        });
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;
        if !resp.status().is_success() {
            bail!("Gemini vision error: {}", resp.text().await.unwrap_or_default());
        }
        let json: serde_json::Value = resp.json().await?;
        Ok(json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or("")
            .to_string())
    }
}
