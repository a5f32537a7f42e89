//! Report rendering for the accumulated inventory.

pub mod markdown;
pub mod table;

pub use markdown::MarkdownReport;
pub use table::render_table;
