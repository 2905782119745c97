//! Deserializers for fields the backend encodes inconsistently (money as string or
//! number, ids as string or number).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("number out of range")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal `{}`", s))),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!(
            "expected decimal, got {}",
            other
        ))),
    }
}

pub fn lenient_f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal `{}`", s))),
        other => Err(serde::de::Error::custom(format!(
            "expected decimal, got {}",
            other
        ))),
    }
}

pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string, got {}",
            other
        ))),
    }
}

/// `null` and missing both become an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Money {
        #[serde(deserialize_with = "lenient_f64")]
        amount: f64,
        #[serde(default, deserialize_with = "lenient_f64_opt")]
        tax: Option<f64>,
        #[serde(deserialize_with = "lenient_string")]
        id: String,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let m: Money = serde_json::from_str(r#"{"amount":"12.50","tax":1,"id":42}"#).unwrap();
        assert_eq!(m.amount, 12.5);
        assert_eq!(m.tax, Some(1.0));
        assert_eq!(m.id, "42");

        let m: Money = serde_json::from_str(r#"{"amount":3,"id":"u-1"}"#).unwrap();
        assert_eq!(m.amount, 3.0);
        assert_eq!(m.tax, None);
        assert_eq!(m.id, "u-1");
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(serde_json::from_str::<Money>(r#"{"amount":"abc","id":"1"}"#).is_err());
    }
}
