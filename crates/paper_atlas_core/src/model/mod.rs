//! Catalog and taxonomy domain model.
//!
//! # Responsibility
//! - Define the canonical records consumed by the filter engine and the
//!   tree builder.
//! - Normalize loosely-typed JSON input into fully-defaulted values once,
//!   right after load.
//!
//! # Invariants
//! - Downstream code never re-derives defaults; every optional field is
//!   resolved by the `From<*Record>` conversions in this module.
//! - Normalization never fails. Malformed scalar values degrade to their
//!   documented default.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod method;
pub mod paper;
pub mod taxonomy;

/// Deserializes an optional integer that may arrive as a JSON number or a
/// numeric string. Integral floats such as `2020.0` are accepted; anything
/// else yields `None`.
pub(crate) fn lenient_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral)),
        Some(Value::String(text)) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };
    Ok(parsed.and_then(|raw| T::try_from(raw).ok()))
}

fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// Trims an optional text field and maps blank values to `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{lenient_int, non_blank};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "lenient_int")]
        value: Option<i32>,
    }

    fn lenient(value: serde_json::Value) -> Option<i32> {
        serde_json::from_value::<Holder>(json!({ "value": value }))
            .expect("lenient field never rejects")
            .value
    }

    #[test]
    fn lenient_int_accepts_integral_numbers_only() {
        assert_eq!(lenient(json!(2020)), Some(2020));
        assert_eq!(lenient(json!(2020.0)), Some(2020));
        assert_eq!(lenient(json!(" 2019 ")), Some(2019));
        assert_eq!(lenient(json!("2018.0")), Some(2018));
        assert_eq!(lenient(json!(2020.5)), None);
        assert_eq!(lenient(json!("soon")), None);
        assert_eq!(lenient(json!(1e12)), None);
        assert_eq!(lenient(json!(null)), None);
    }

    #[test]
    fn non_blank_trims_and_drops_empty_values() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some(" rl ".to_string())), Some("rl".to_string()));
        assert_eq!(non_blank(Some("rl".to_string())), Some("rl".to_string()));
    }
}
