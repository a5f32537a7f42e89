//! One analysis session: images in, accumulated inventory and report out.
//!
//! The session owns the `Inventory` instance; a failed image leaves it
//! untouched and the session continues with the next image.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{error, info};

use shelfscan_config::{Provider, ShelfScanConfig};
use shelfscan_core::{lifespan_display, Observation, ReportSink, ScanError, VisionClient};
use shelfscan_extract::parse_response;
use shelfscan_inventory::Inventory;
use shelfscan_report::{render_table, MarkdownReport};
use shelfscan_vision::{to_png, GeminiVision, MockVision, OpenAiVision};

pub async fn run(
    config: &ShelfScanConfig,
    images: &[std::path::PathBuf],
    report: Option<&Path>,
    mock: bool,
) -> Result<()> {
    let client = build_client(config, mock)?;
    info!(provider = client.name(), images = images.len(), "Starting analysis session");

    let mut inventory = Inventory::new();
    let mut succeeded = 0usize;

    for path in images {
        match analyze_one(client.as_ref(), path).await {
            Ok(batch) => {
                print_batch(&batch);
                inventory.reconcile(batch);
                succeeded += 1;
            }
            Err(e) => {
                error!(image = %path.display(), error = %e, "Analysis failed");
                eprintln!("Failed to analyze {}: {e}", path.display());
            }
        }
    }

    println!("\nProduct Inventory");
    if inventory.is_empty() {
        println!("No products scanned yet.");
    } else {
        print!("{}", render_table(inventory.records()));
    }

    if let Some(path) = report {
        MarkdownReport::new(path).render(inventory.records())?;
        println!("Report written to {}", path.display());
    }

    if succeeded == 0 {
        bail!("no image analyzed successfully");
    }
    Ok(())
}

/// One analysis pass: read, PNG-normalize, call the provider, validate.
///
/// Parse failures are all-or-nothing, so a batch is only returned when every
/// observation in it is valid.
async fn analyze_one(client: &dyn VisionClient, path: &Path) -> Result<Vec<Observation>, ScanError> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image: {}", path.display()))?;
    let png = to_png(&bytes)?;

    let reply = client
        .analyze(&png)
        .await
        .map_err(|e| ScanError::UpstreamUnavailable(e.to_string()))?;

    Ok(parse_response(&reply)?)
}

fn build_client(config: &ShelfScanConfig, mock: bool) -> Result<Box<dyn VisionClient>> {
    if mock {
        return Ok(Box::new(MockVision::new()));
    }
    match config.provider {
        Provider::Gemini => {
            let key = config
                .gemini_api_key
                .as_deref()
                .context("GEMINI_API_KEY is not configured")?;
            Ok(Box::new(GeminiVision::new(key, config.model_name())))
        }
        Provider::Openai => {
            let key = config
                .openai_api_key
                .as_deref()
                .context("OPENAI_API_KEY is not configured")?;
            Ok(Box::new(OpenAiVision::new(key, config.model_name())))
        }
        Provider::Mock => Ok(Box::new(MockVision::new())),
    }
}

fn print_batch(batch: &[Observation]) {
    for obs in batch {
        println!("Product details for {} (Expiry: {}):", obs.brand, obs.expiry_date);
        println!("  Count: {}", obs.count);
        println!("  Expired: {}", obs.expired);
        println!(
            "  Expected lifespan (days): {}",
            lifespan_display(obs.expected_lifespan_days)
        );
        println!("---");
    }
}
