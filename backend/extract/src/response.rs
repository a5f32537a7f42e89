//! Schema validation and coercion of the raw model reply.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use shelfscan_core::{ExpiryStatus, ExtractError, Observation};

use crate::dates::{expiry_status, lifespan_days, parse_expiry_date};

/// Fence markers some providers wrap around the JSON payload.
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^```json\s*|\s*```$").expect("fence regex"));

/// Parse a raw model reply into a batch of observations stamped with the
/// current local time.
pub fn parse_response(raw: &str) -> Result<Vec<Observation>, ExtractError> {
    parse_response_at(raw, Local::now())
}

/// Same as [`parse_response`] with an injected clock, for deterministic tests.
///
/// All-or-nothing: the first invalid element aborts the batch, so a failed
/// analysis never yields partial results.
pub fn parse_response_at(
    raw: &str,
    now: DateTime<Local>,
) -> Result<Vec<Observation>, ExtractError> {
    let cleaned = CODE_FENCE.replace_all(raw.trim(), "");
    let cleaned = cleaned.trim();

    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| ExtractError::MalformedResponse(e.to_string()))?;
    let items = value.as_array().ok_or_else(|| {
        ExtractError::MalformedResponse("expected a JSON array of products".to_string())
    })?;

    let mut batch = Vec::with_capacity(items.len());
    for item in items {
        batch.push(parse_product(item, now)?);
    }
    debug!(products = batch.len(), "Parsed model reply");
    Ok(batch)
}

fn parse_product(item: &Value, now: DateTime<Local>) -> Result<Observation, ExtractError> {
    let obj = item.as_object().ok_or_else(|| {
        ExtractError::MalformedResponse("array element is not an object".to_string())
    })?;

    let brand = require(obj, "brand")?
        .as_str()
        .ok_or(ExtractError::InvalidFieldType {
            field: "brand",
            expected: "string",
        })?
        .trim();
    if brand.is_empty() {
        return Err(ExtractError::InvalidFieldType {
            field: "brand",
            expected: "non-empty string",
        });
    }

    let expiry_date = require(obj, "expiry_date")?
        .as_str()
        .ok_or(ExtractError::InvalidFieldType {
            field: "expiry_date",
            expected: "string",
        })?;

    let count = coerce_count(require(obj, "count")?)?;

    let (expired, expected_lifespan_days) = match parse_expiry_date(expiry_date) {
        Some(date) => (
            expiry_status(date, now.date_naive()),
            lifespan_days(date, now.naive_local()),
        ),
        None => (ExpiryStatus::Na, None),
    };

    Ok(Observation {
        brand: brand.to_string(),
        expiry_date: expiry_date.to_string(),
        count,
        expired,
        expected_lifespan_days,
        timestamp: now,
    })
}

fn require<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, ExtractError> {
    obj.get(field).ok_or(ExtractError::MissingField(field))
}

/// Coerce an integer, float, or numeric string to a count via float truncation.
/// Negative and non-finite values are rejected.
fn coerce_count(value: &Value) -> Result<u64, ExtractError> {
    let numeric = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match numeric {
        Some(f) if f.is_finite() && f >= 0.0 => Ok(f.trunc() as u64),
        _ => Err(ExtractError::InvalidFieldType {
            field: "count",
            expected: "non-negative number",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_response_at("not json", fixed_now()).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_non_array_top_level() {
        let err = parse_response_at(r#"{"brand": "Nestle"}"#, fixed_now()).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedResponse(_)));
    }

    #[test]
    fn empty_array_is_a_valid_empty_batch() {
        let batch = parse_response_at("[]", fixed_now()).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn strips_code_fences() {
        let raw = "```json\n[{\"brand\": \"Nestle\", \"expiry_date\": \"01/12/2024\", \"count\": 2}]\n```";
        let batch = parse_response_at(raw, fixed_now()).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].brand, "Nestle");
    }

    #[test]
    fn missing_field_names_the_key() {
        let raw = r#"[{"brand": "Nestle", "expiry_date": "01/12/2024"}]"#;
        let err = parse_response_at(raw, fixed_now()).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField("count")));
    }

    #[test]
    fn brand_is_trimmed_and_must_be_non_empty() {
        let raw = r#"[{"brand": "  Nestle ", "expiry_date": "NA", "count": 1}]"#;
        let batch = parse_response_at(raw, fixed_now()).unwrap();
        assert_eq!(batch[0].brand, "Nestle");

        let raw = r#"[{"brand": "   ", "expiry_date": "NA", "count": 1}]"#;
        let err = parse_response_at(raw, fixed_now()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::InvalidFieldType { field: "brand", .. }
        ));
    }

    #[test]
    fn count_coercion_truncates_floats_and_numeric_strings() {
        let raw = r#"[
            {"brand": "A", "expiry_date": "NA", "count": 2},
            {"brand": "B", "expiry_date": "NA", "count": 3.9},
            {"brand": "C", "expiry_date": "NA", "count": "3.0"},
            {"brand": "D", "expiry_date": "NA", "count": 0}
        ]"#;
        let batch = parse_response_at(raw, fixed_now()).unwrap();
        let counts: Vec<u64> = batch.iter().map(|o| o.count).collect();
        assert_eq!(counts, vec![2, 3, 3, 0]);
    }

    #[test]
    fn uncoercible_count_rejects_the_whole_batch() {
        for bad in [r#""many""#, "true", "-1", r#""-2""#, "null"] {
            let raw = format!(
                r#"[{{"brand": "A", "expiry_date": "NA", "count": 1}},
                    {{"brand": "B", "expiry_date": "NA", "count": {bad}}}]"#
            );
            let err = parse_response_at(&raw, fixed_now()).unwrap_err();
            assert!(
                matches!(err, ExtractError::InvalidFieldType { field: "count", .. }),
                "count {bad} should be rejected"
            );
        }
    }

    #[test]
    fn non_string_expiry_date_is_a_type_error() {
        let raw = r#"[{"brand": "A", "expiry_date": 2025, "count": 1}]"#;
        let err = parse_response_at(raw, fixed_now()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::InvalidFieldType { field: "expiry_date", .. }
        ));
    }

    #[test]
    fn unknown_date_still_produces_an_observation() {
        let raw = r#"[{"brand": "Cadbury", "expiry_date": "NA", "count": 1}]"#;
        let batch = parse_response_at(raw, fixed_now()).unwrap();
        let obs = &batch[0];
        assert_eq!(obs.expiry_date, "NA");
        assert_eq!(obs.expired, ExpiryStatus::Na);
        assert_eq!(obs.expected_lifespan_days, None);
    }

    #[test]
    fn year_only_date_is_interpreted_as_january_first() {
        let raw = r#"[{"brand": "X", "expiry_date": "2025", "count": "3.0"}]"#;
        let batch = parse_response_at(raw, fixed_now()).unwrap();
        let obs = &batch[0];
        assert_eq!(obs.count, 3);
        // 2025-01-01 relative to 2024-06-15: not expired, 199 full days ahead.
        assert_eq!(obs.expired, ExpiryStatus::No);
        assert_eq!(obs.expected_lifespan_days, Some(199));
        // The surface string is preserved, not renormalized.
        assert_eq!(obs.expiry_date, "2025");
    }

    #[test]
    fn expired_date_keeps_raw_string_but_drops_lifespan() {
        let raw = r#"[{"brand": "X", "expiry_date": "01/01/2020", "count": 1}]"#;
        let batch = parse_response_at(raw, fixed_now()).unwrap();
        let obs = &batch[0];
        assert_eq!(obs.expired, ExpiryStatus::Yes);
        assert_eq!(obs.expected_lifespan_days, None);
        assert_eq!(obs.expiry_date, "01/01/2020");
    }

    #[test]
    fn observations_come_back_in_input_order() {
        let raw = r#"[
            {"brand": "Nestle", "expiry_date": "01/12/2024", "count": 2},
            {"brand": "Cadbury", "expiry_date": "01/06/2025", "count": 1}
        ]"#;
        let batch = parse_response_at(raw, fixed_now()).unwrap();
        let brands: Vec<&str> = batch.iter().map(|o| o.brand.as_str()).collect();
        assert_eq!(brands, vec!["Nestle", "Cadbury"]);
        assert!(batch.iter().all(|o| o.timestamp == fixed_now()));
    }
}
