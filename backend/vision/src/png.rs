//! Upload normalization: every provider call sends PNG-encoded bytes.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::ImageFormat;

/// Decode an uploaded image (JPEG, PNG, WebP, ...) and re-encode it as PNG.
pub fn to_png(bytes: &[u8]) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes).context("unsupported or corrupt image data")?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .context("failed to encode PNG")?;
    Ok(out.into_inner())
}
