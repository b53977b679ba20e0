//! Raw status input as it arrives from upstream sources.
//!
//! Upstream data is loosely typed: a CSV cell, a JSON field that may be a
//! string, a number or `null`, a missing column. `RawStatus` names those
//! shapes explicitly so the normalization algorithm only ever sees one
//! string after [`RawStatus::coerce`].

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

/// Status value before normalization
///
/// Deserialization accepts any JSON value and never fails on shape:
/// arrays and objects become their JSON text, the same as
/// `From<&serde_json::Value>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum RawStatus {
    /// Missing field, `null`, `None`
    #[default]
    Absent,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for RawStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(RawStatus::from(&value))
    }
}

impl RawStatus {
    pub fn is_absent(&self) -> bool {
        matches!(self, RawStatus::Absent)
    }

    /// Coerce to the textual form used for alias lookup.
    ///
    /// `Absent` has no textual form. Numbers render the way a number is
    /// printed for display: integral values without a fraction (`2.0` is
    /// `"2"`, `-0.0` is `"0"`), `NaN` as `"NaN"`, infinities as
    /// `"Infinity"` / `"-Infinity"`.
    pub fn coerce(&self) -> Option<Cow<'_, str>> {
        match self {
            RawStatus::Absent => None,
            RawStatus::Text(s) => Some(Cow::Borrowed(s.as_str())),
            RawStatus::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            RawStatus::Integer(n) => Some(Cow::Owned(n.to_string())),
            RawStatus::Unsigned(n) => Some(Cow::Owned(n.to_string())),
            RawStatus::Float(f) => Some(Cow::Owned(format_float(*f))),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // 1e21 and above switch to exponent notation in display form
    if f.fract() == 0.0 && f.abs() < 1e21 {
        return format!("{:.0}", f + 0.0);
    }
    f.to_string()
}

impl From<&str> for RawStatus {
    fn from(value: &str) -> Self {
        RawStatus::Text(value.to_string())
    }
}

impl From<String> for RawStatus {
    fn from(value: String) -> Self {
        RawStatus::Text(value)
    }
}

impl From<&String> for RawStatus {
    fn from(value: &String) -> Self {
        RawStatus::Text(value.clone())
    }
}

impl From<bool> for RawStatus {
    fn from(value: bool) -> Self {
        RawStatus::Bool(value)
    }
}

impl From<i64> for RawStatus {
    fn from(value: i64) -> Self {
        RawStatus::Integer(value)
    }
}

impl From<i32> for RawStatus {
    fn from(value: i32) -> Self {
        RawStatus::Integer(value as i64)
    }
}

impl From<u32> for RawStatus {
    fn from(value: u32) -> Self {
        RawStatus::Integer(value as i64)
    }
}

impl From<u64> for RawStatus {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(RawStatus::Integer)
            .unwrap_or(RawStatus::Unsigned(value))
    }
}

impl From<f64> for RawStatus {
    fn from(value: f64) -> Self {
        RawStatus::Float(value)
    }
}

impl<T: Into<RawStatus>> From<Option<T>> for RawStatus {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawStatus::Absent)
    }
}

impl From<&serde_json::Value> for RawStatus {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => RawStatus::Absent,
            Value::Bool(b) => RawStatus::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawStatus::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    RawStatus::Unsigned(u)
                } else {
                    n.as_f64()
                        .map(RawStatus::Float)
                        .unwrap_or_else(|| RawStatus::Text(n.to_string()))
                }
            }
            Value::String(s) => RawStatus::Text(s.clone()),
            // Structured values keep their JSON text, which no alias matches
            Value::Array(_) | Value::Object(_) => RawStatus::Text(value.to_string()),
        }
    }
}

impl From<serde_json::Value> for RawStatus {
    fn from(value: serde_json::Value) -> Self {
        RawStatus::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(RawStatus::from(42i64).coerce().as_deref(), Some("42"));
        assert_eq!(RawStatus::from(2.0).coerce().as_deref(), Some("2"));
        assert_eq!(RawStatus::from(-0.0).coerce().as_deref(), Some("0"));
        assert_eq!(RawStatus::from(1.5).coerce().as_deref(), Some("1.5"));
        assert_eq!(RawStatus::from(f64::NAN).coerce().as_deref(), Some("NaN"));
        assert_eq!(
            RawStatus::from(f64::NEG_INFINITY).coerce().as_deref(),
            Some("-Infinity")
        );
    }

    #[test]
    fn test_coerce_absent_and_text() {
        assert_eq!(RawStatus::Absent.coerce(), None);
        assert_eq!(RawStatus::from(None::<&str>), RawStatus::Absent);
        assert_eq!(RawStatus::from(Some("Done")).coerce().as_deref(), Some("Done"));
        assert_eq!(RawStatus::from("").coerce().as_deref(), Some(""));
    }

    #[test]
    fn test_from_json_value() {
        assert_eq!(RawStatus::from(json!(null)), RawStatus::Absent);
        assert_eq!(RawStatus::from(json!("Done")), RawStatus::Text("Done".into()));
        assert_eq!(RawStatus::from(json!(7)), RawStatus::Integer(7));
        assert_eq!(RawStatus::from(json!(true)), RawStatus::Bool(true));
        assert_eq!(
            RawStatus::from(json!(["done"])).coerce().as_deref(),
            Some("[\"done\"]")
        );
    }

    #[test]
    fn test_deserialize_structured_values_as_text() {
        let array: RawStatus = serde_json::from_str(r#"["done"]"#).unwrap();
        assert_eq!(array, RawStatus::Text("[\"done\"]".into()));
        assert_eq!(array, RawStatus::from(json!(["done"])));

        let object: RawStatus = serde_json::from_str(r#"{"status": "done"}"#).unwrap();
        assert_eq!(object, RawStatus::from(json!({"status": "done"})));
    }

    #[test]
    fn test_large_unsigned_keeps_exact_text() {
        let raw: RawStatus = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(raw, RawStatus::Unsigned(u64::MAX));
        assert_eq!(raw.coerce().as_deref(), Some("18446744073709551615"));
        assert_eq!(RawStatus::from(u64::MAX), raw);
        assert_eq!(RawStatus::from(5u64), RawStatus::Integer(5));
    }

    #[test]
    fn test_record_with_odd_status_deserializes() {
        #[derive(Debug, Deserialize)]
        struct Row {
            id: u32,
            status: RawStatus,
        }

        let row: Row = serde_json::from_str(r#"{"id": 1, "status": {"code": 3}}"#).unwrap();
        assert_eq!(row.id, 1);
        assert!(matches!(row.status, RawStatus::Text(_)));
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<RawStatus> = serde_json::from_str(r#"[null, "x", 3, 2.5, false]"#).unwrap();
        assert_eq!(
            values,
            vec![
                RawStatus::Absent,
                RawStatus::Text("x".into()),
                RawStatus::Integer(3),
                RawStatus::Float(2.5),
                RawStatus::Bool(false),
            ]
        );
    }
}
