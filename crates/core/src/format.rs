//! Text helpers used by code templates rendering the token map.

use serde::Serialize;

/// Turn `text` into a `///` doc comment.
///
/// The input is trimmed first. Every line after the first is prefixed with
/// `indent` so the comment lines up under the declaration it documents.
pub fn documentation_comment(text: &str, indent: &str) -> String {
    text.trim()
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let indent = if i > 0 { indent } else { "" };
            format!("{indent}/// {line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render `value` as JSON indented by two spaces.
///
/// Serialized trees are owned, so reference cycles cannot occur here.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
