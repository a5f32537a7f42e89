use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use shelfscan_core::{InventoryRecord, ReportSink};

use crate::table::render_table;

/// Writes the inventory as a Markdown document.
pub struct MarkdownReport {
    path: PathBuf,
}

impl MarkdownReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for MarkdownReport {
    fn render(&self, records: &[InventoryRecord]) -> Result<()> {
        let mut doc = String::new();
        doc.push_str("# Product Inventory Report\n\n");
        doc.push_str(&format!("Generated: {}\n\n", Local::now().to_rfc3339()));
        if records.is_empty() {
            doc.push_str("No products scanned yet.\n");
        } else {
            doc.push_str(&render_table(records));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create report directory: {}", parent.display())
                })?;
            }
        }
        fs::write(&self.path, doc)
            .with_context(|| format!("Failed to write report: {}", self.path.display()))?;

        info!(path = %self.path.display(), records = records.len(), "Report written");
        Ok(())
    }
}
