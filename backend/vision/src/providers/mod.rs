//! `VisionClient` implementations.

pub mod gemini;
pub mod mock;
pub mod openai;

pub use gemini::GeminiVision;
pub use mock::MockVision;
pub use openai::OpenAiVision;
