//! JSON bodies sent back to clients.

use num_bigint::BigUint;
use serde::{ser::Error as _, Serialize, Serializer};
use serde_json::value::RawValue;

/// Body of every successful response: `{"result": <value>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

impl<T> ResultEnvelope<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// Numeric payload of a successful response.
///
/// Integers are written as bare JSON integers of any length, floats keep
/// their decimal point.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericResult {
    Integer(BigUint),
    Float(f64),
}

impl Serialize for NumericResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Decimal digits are always a valid JSON number token.
            NumericResult::Integer(n) => RawValue::from_string(n.to_string())
                .map_err(S::Error::custom)?
                .serialize(serializer),
            NumericResult::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

/// Placeholder body for failure statuses: `{"message": "none"}`.
///
/// Carries no detail about what went wrong.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageEnvelope {
    pub message: &'static str,
}

impl Default for MessageEnvelope {
    fn default() -> Self {
        Self { message: "none" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(result: NumericResult) -> String {
        serde_json::to_string(&ResultEnvelope::new(result)).unwrap()
    }

    #[test]
    fn test_numeric_result_is_untagged() {
        assert_eq!(to_json(NumericResult::Integer(BigUint::from(55u32))), r#"{"result":55}"#);
        assert_eq!(to_json(NumericResult::Float(2.5)), r#"{"result":2.5}"#);

        // Floats keep the decimal point even when integral
        assert_eq!(to_json(NumericResult::Float(2.0)), r#"{"result":2.0}"#);

        // Integers wider than any machine type stay exact
        let wide: BigUint = "10333147966386144929666651337523200000000".parse().unwrap();
        assert_eq!(
            to_json(NumericResult::Integer(wide)),
            r#"{"result":10333147966386144929666651337523200000000}"#
        );
    }

    #[test]
    fn test_placeholder() {
        let body = serde_json::to_string(&MessageEnvelope::default()).unwrap();
        assert_eq!(body, r#"{"message":"none"}"#);
    }
}
