use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which remote vision provider to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    Openai,
    Mock,
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::Openai),
            "mock" => Ok(Provider::Mock),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// Root configuration for ShelfScan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShelfScanConfig {
    pub provider: Provider,
    /// Model name; falls back to the provider default when unset.
    pub model: Option<String>,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub log_level: String,
}

impl Default for ShelfScanConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            model: None,
            gemini_api_key: None,
            openai_api_key: None,
            log_level: "info".to_string(),
        }
    }
}

impl ShelfScanConfig {
    /// The model to request, falling back to the provider default.
    pub fn model_name(&self) -> &str {
        self.model.as_deref().unwrap_or(match self.provider {
            Provider::Gemini => "gemini-2.0-flash",
            Provider::Openai => "gpt-4o",
            Provider::Mock => "mock",
        })
    }
}
