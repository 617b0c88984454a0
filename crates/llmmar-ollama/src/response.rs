//! Newline-delimited JSON response folding.

use serde_json::Value;
use tracing::{debug, warn};

/// Concatenate the `response` fields of every line of `body`, in line order.
///
/// Lines are parsed independently as JSON values; other fields on a line
/// never affect its `response`. Strings are appended as-is, numbers and
/// `true` as their JSON text. Empty lines, malformed lines and lines with an
/// absent or empty `response` contribute nothing and never stop the scan.
/// The result is not trimmed.
pub fn accumulate_response(body: &str) -> String {
    let mut accumulated = String::new();

    for line in body.split('\n').filter(|line| !line.is_empty()) {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                debug!("Skipping malformed response line: {}", e);
                continue;
            }
        };

        if let Some(error) = value.get("error") {
            warn!("Server reported an error: {}", error);
        }
        if let Some(text) = response_text(value.get("response")) {
            accumulated.push_str(&text);
        }
    }

    accumulated
}

/// Text contributed by a `response` field, if it carries any.
fn response_text(field: Option<&Value>) -> Option<String> {
    match field? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
