//! Config file loading with environment overrides.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::schema::ShelfScanConfig;

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the ShelfScan config directory.
/// Priority: `SHELFSCAN_CONFIG_DIR` env > `~/.shelfscan/`.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SHELFSCAN_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".shelfscan");
    }
    PathBuf::from(".shelfscan")
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load the config: YAML file if present, defaults otherwise, then env
/// overrides on top.
pub fn load() -> Result<ShelfScanConfig> {
    let path = config_file_path(&config_dir());
    let mut config = load_file(&path)?;
    apply_env(&mut config, &std::env::vars().collect());
    Ok(config)
}

/// Load and parse the config file; a missing file is the defaults (first run).
pub fn load_file(path: &Path) -> Result<ShelfScanConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(ShelfScanConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: ShelfScanConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Apply environment overrides from a provided map (injectable for tests).
pub fn apply_env(config: &mut ShelfScanConfig, env: &HashMap<String, String>) {
    if let Some(v) = env.get("SHELFSCAN_PROVIDER") {
        match v.parse() {
            Ok(p) => config.provider = p,
            Err(e) => warn!(value = %v, "Ignoring SHELFSCAN_PROVIDER: {e}"),
        }
    }
    if let Some(v) = env.get("SHELFSCAN_MODEL") {
        config.model = Some(v.clone());
    }
    if let Some(v) = env.get("GEMINI_API_KEY") {
        config.gemini_api_key = Some(v.clone());
    }
    if let Some(v) = env.get("OPENAI_API_KEY") {
        config.openai_api_key = Some(v.clone());
    }
    if let Some(v) = env.get("SHELFSCAN_LOG") {
        config.log_level = v.clone();
    }
}
