//! Request body validation.

use serde_json::{Map, Value};

pub const FIELD_A: &str = "supplement_1";
pub const FIELD_B: &str = "supplement_2";

/// Pull both supplement names out of the request body.
///
/// Returns `(true, a, b)` with trimmed names when both are present and
/// non-blank, otherwise `(false, "", "")`. Non-string values count as
/// missing.
pub fn validate_input(body: &Map<String, Value>) -> (bool, String, String) {
    let supplement_a = field(body, FIELD_A);
    let supplement_b = field(body, FIELD_B);

    if supplement_a.is_empty() || supplement_b.is_empty() {
        return (false, String::new(), String::new());
    }
    (true, supplement_a.to_string(), supplement_b.to_string())
}

fn field<'a>(body: &'a Map<String, Value>, key: &str) -> &'a str {
    body.get(key).and_then(Value::as_str).unwrap_or("").trim()
}
