//! ShelfScan configuration: YAML file plus environment overrides.

pub mod io;
pub mod schema;

pub use io::{config_dir, config_file_path, load};
pub use schema::{Provider, ShelfScanConfig};
