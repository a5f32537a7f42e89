//! Core types, traits, and error taxonomy shared across the ShelfScan crates.

pub mod error;
pub mod record;
pub mod traits;

pub use error::{ExtractError, ScanError};
pub use record::{lifespan_display, ExpiryStatus, InventoryRecord, Observation};
pub use traits::{ReportSink, VisionClient};
