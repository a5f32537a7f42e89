use anyhow::Result;
use async_trait::async_trait;

use shelfscan_core::VisionClient;

/// A provider that returns a canned reply, for tests and offline runs.
pub struct MockVision {
    reply: String,
}

impl MockVision {
    pub fn new() -> Self {
        Self {
            reply: r#"[{"brand": "Nestle", "expiry_date": "01/12/2024", "count": 2}]"#.to_string(),
        }
    }

    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = reply.into();
        self
    }
}

impl Default for MockVision {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionClient for MockVision {
    fn name(&self) -> &str {
        "mock"
    }

    async fn analyze(&self, _png_bytes: &[u8]) -> Result<String> {
        Ok(self.reply.clone())
    }
}
