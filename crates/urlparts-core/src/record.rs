//! Input and output record shapes, as they appear on the wire.

use serde::{Deserialize, Serialize};

/// One raw URL row read from the input batch.
///
/// Unknown fields on the input line are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub row_id: i64,
    pub is_sample: bool,
    /// Percent-encoded URL text; may be malformed.
    pub raw_url: String,
}

impl InputRecord {
    pub fn new(row_id: i64, is_sample: bool, raw_url: impl Into<String>) -> Self {
        Self {
            row_id,
            is_sample,
            raw_url: raw_url.into(),
        }
    }
}

/// A single `name=value` pair from a query string. `value` is empty, never missing,
/// when the token had no `=`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueryParam {
    pub name: String,
    pub value: String,
}

impl QueryParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One decomposed row per input row.
///
/// The scheme is persisted under the field name `schema` and the parameter list
/// under `query_params_array` for compatibility with existing consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub row_id: i64,
    pub is_sample: bool,
    pub raw_url: String,
    #[serde(rename = "schema", default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub fragment: Option<String>,
    #[serde(rename = "query_params_array", default)]
    pub query_params: Vec<QueryParam>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_ignores_extra_fields() {
        let line = r#"{"row_id": 7, "is_sample": true, "raw_url": "https://a.com/", "source": "crawl"}"#;
        let rec: InputRecord = serde_json::from_str(line).unwrap();
        assert_eq!(rec, InputRecord::new(7, true, "https://a.com/"));
    }

    #[test]
    fn input_requires_core_fields() {
        let line = r#"{"row_id": 7, "raw_url": "https://a.com/"}"#;
        assert!(serde_json::from_str::<InputRecord>(line).is_err());
    }

    #[test]
    fn output_uses_wire_field_names() {
        let rec = OutputRecord {
            row_id: 1,
            is_sample: false,
            raw_url: "https://a.com/p?a=1".to_string(),
            scheme: Some("https".to_string()),
            domain: Some("a.com".to_string()),
            path: Some("/p".to_string()),
            fragment: None,
            query_params: vec![QueryParam::new("a", "1")],
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["schema"], "https");
        assert_eq!(value["query_params_array"][0]["name"], "a");
        assert_eq!(value["query_params_array"][0]["value"], "1");
        assert!(value.get("scheme").is_none());
        assert!(value["fragment"].is_null());
    }

    #[test]
    fn output_reads_back_with_omitted_nulls() {
        let line = r#"{"row_id":3,"is_sample":false,"raw_url":"x","query_params_array":[]}"#;
        let rec: OutputRecord = serde_json::from_str(line).unwrap();
        assert_eq!(rec.scheme, None);
        assert_eq!(rec.domain, None);
        assert!(rec.query_params.is_empty());
    }
}
