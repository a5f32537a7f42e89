//! ResponseParser: raw vision-model text → validated, normalized observations.
//!
//! The producer contract asks the model for a JSON array of
//! `{brand, expiry_date, count}` objects, possibly wrapped in code-fence
//! markers. Parsing is all-or-nothing per reply: any invalid element rejects
//! the whole batch.

pub mod dates;
pub mod response;

pub use dates::parse_expiry_date;
pub use response::{parse_response, parse_response_at};
