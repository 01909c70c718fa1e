use serde_json::Value;

use crate::JsonMap;

/// Decodes a response body into a JSON object.
///
/// Empty bodies, malformed JSON and non-object documents all yield an empty map.
pub(crate) fn decode_object(body: &str) -> JsonMap {
    if body.trim().is_empty() {
        return JsonMap::new();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => JsonMap::new(),
    }
}

/// Trimmed body text when it is non-empty and not JSON at all.
pub(crate) fn plain_text(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() || serde_json::from_str::<Value>(trimmed).is_ok() {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Prefers the upstream `message` field over the transport-level fallback.
pub(crate) fn error_message(body: &JsonMap, fallback: impl FnOnce() -> String) -> String {
    match body.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        _ => fallback(),
    }
}

/// Flattens parameters into query-string pairs.
///
/// Arrays become repeated keys, nulls are dropped, other scalars are
/// stringified. Insertion order is preserved.
pub(crate) fn query_pairs(params: &JsonMap) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_to_string(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_to_string(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Joins the API root and an endpoint path with exactly one `/`.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
