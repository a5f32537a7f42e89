use anyhow::Result;
use async_trait::async_trait;

use crate::record::InventoryRecord;

/// A remote vision-language provider: image bytes in, raw reply text out.
///
/// Implementations carry the fixed extraction instruction; callers only supply
/// the PNG-encoded image. Network and model behavior are outside this system's
/// control, so errors are surfaced as-is, without retry.
#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Provider name (e.g., "gemini", "openai").
    fn name(&self) -> &str;

    /// Send the image plus the extraction instruction; return the raw reply text.
    async fn analyze(&self, png_bytes: &[u8]) -> Result<String>;
}

/// A sink consuming the final ordered inventory and rendering a document.
pub trait ReportSink {
    fn render(&self, records: &[InventoryRecord]) -> Result<()>;
}
