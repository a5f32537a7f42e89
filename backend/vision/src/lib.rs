//! Vision-LLM providers for product extraction.
//!
//! Each provider sends a PNG-encoded image together with the fixed extraction
//! instruction and returns the raw reply text. What the model actually said is
//! validated downstream by `shelfscan-extract`.

pub mod png;
pub mod prompt;
pub mod providers;

pub use png::to_png;
pub use prompt::EXTRACTION_PROMPT;
pub use providers::{GeminiVision, MockVision, OpenAiVision};
