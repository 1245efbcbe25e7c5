//! Invocation event and response shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Incoming request as delivered by the hosting runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandlerEvent {
    /// Raw JSON request body. Absent means `{}`.
    #[serde(default)]
    pub body: Option<String>,
}

impl HandlerEvent {
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

/// Two validated, trimmed supplement names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementPair {
    pub name_a: String,
    pub name_b: String,
}

/// Response handed back to the hosting runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded `{"result": ..}` or `{"error": ..}`.
    pub body: String,
}

impl HandlerResponse {
    pub fn success(result: &str) -> Self {
        let headers = BTreeMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ]);
        Self {
            status_code: 200,
            headers,
            body: json!({ "result": result }).to_string(),
        }
    }

    pub fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: json!({ "error": message }).to_string(),
        }
    }
}
