//! API request input types.

use serde::Deserialize;

// ==================== Mean ====================

/// One element of the JSON array posted to `/mean`.
///
/// Numbers are taken as-is, booleans count as `1.0` / `0.0`, and strings must
/// hold a finite decimal float (`"nan"` and `"inf"` are refused). Anything
/// else fails deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Sample {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl Sample {
    pub fn to_f64(&self) -> Result<f64, String> {
        match self {
            Sample::Number(v) => Ok(*v),
            Sample::Flag(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Sample::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                Ok(_) => Err(format!("'{}' is not a finite number", s)),
                Err(e) => Err(format!("Cannot convert '{}' to a number: {}", s, e)),
            },
        }
    }
}

/// Body of `/mean`: a JSON array of samples.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct MeanRequest {
    pub samples: Vec<Sample>,
}

impl MeanRequest {
    pub fn values(&self) -> Result<Vec<f64>, String> {
        self.samples.iter().map(Sample::to_f64).collect()
    }
}

// ==================== Factorial ====================

/// Raw query string pairs, in the order they appear in the URL.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct QueryPairs {
    pub pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// First non-blank value for `key`. Blank values (`?n=`) are skipped.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_request_mixed_samples() {
        let request: MeanRequest = serde_json::from_str(r#"[1, 2.5, true, " 3.5 "]"#).unwrap();
        assert_eq!(request.values().unwrap(), vec![1.0, 2.5, 1.0, 3.5]);
    }

    #[test]
    fn test_mean_request_rejects_non_array() {
        assert!(serde_json::from_str::<MeanRequest>(r#"{"a": 1}"#).is_err());
        assert!(serde_json::from_str::<MeanRequest>("5").is_err());
        assert!(serde_json::from_str::<MeanRequest>("").is_err());
    }

    #[test]
    fn test_mean_request_rejects_null_and_nested() {
        assert!(serde_json::from_str::<MeanRequest>("[1, null]").is_err());
        assert!(serde_json::from_str::<MeanRequest>("[[1, 2]]").is_err());
    }

    #[test]
    fn test_non_numeric_text_sample() {
        let request: MeanRequest = serde_json::from_str(r#"[1, "abc"]"#).unwrap();
        assert!(request.values().is_err());
    }

    #[test]
    fn test_non_finite_text_sample() {
        for raw in [r#"["nan"]"#, r#"["inf", 1]"#, r#"["-Infinity"]"#] {
            let request: MeanRequest = serde_json::from_str(raw).unwrap();
            assert!(request.values().is_err(), "expected {} to be refused", raw);
        }
    }

    #[test]
    fn test_query_first_value_wins() {
        let query = QueryPairs {
            pairs: vec![
                ("m".to_string(), "9".to_string()),
                ("n".to_string(), "".to_string()),
                ("n".to_string(), "4".to_string()),
                ("n".to_string(), "7".to_string()),
            ],
        };
        assert_eq!(query.first("n"), Some("4"));
        assert_eq!(query.first("missing"), None);
    }
}
