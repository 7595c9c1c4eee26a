pub mod themes;
pub mod token_list;

use thiserror::Error;
use tokenmap_protocol::{RawToken, ThemeDataset};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("themes: {0}")]
    Themes(#[from] themes::ThemesParseError),
    #[error("token list: {0}")]
    TokenList(#[from] token_list::TokenListParseError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to detect dataset format")]
    UnknownFormat,
}

/// A parsed design-token export.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    /// Named theme partitions, each overriding a set of tokens.
    Themes(ThemeDataset),
    /// A flat token list whose theme is inferred from its source path.
    TokenList(Vec<RawToken>),
}

/// Auto-detect the dataset shape and parse it.
///
/// - A top-level array, or an object with a `tokens` array, is a token list.
/// - An object whose values are objects carrying `overriddenTokens` is a
///   theme dataset. An empty object is an empty theme dataset.
pub fn parse_auto(data: &[u8]) -> Result<Dataset, ParseError> {
    let value: serde_json::Value = serde_json::from_slice(data)?;

    if value.is_array() {
        return Ok(Dataset::TokenList(token_list::parse_token_list(data)?));
    }

    if let Some(obj) = value.as_object() {
        if obj.get("tokens").is_some_and(serde_json::Value::is_array) {
            return Ok(Dataset::TokenList(token_list::parse_token_list(data)?));
        }

        if obj
            .values()
            .all(|theme| theme.get("overriddenTokens").is_some())
        {
            return Ok(Dataset::Themes(themes::parse_themes(data)?));
        }
    }

    Err(ParseError::UnknownFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_theme_dataset() {
        let json = r#"{"t1": {"name": "Dark", "overriddenTokens": {}}}"#;
        let dataset = parse_auto(json.as_bytes()).unwrap();
        assert!(matches!(dataset, Dataset::Themes(themes) if themes.len() == 1));
    }

    #[test]
    fn detects_bare_token_list() {
        let json = r#"[{"name": "Primary"}, {"name": "Accent"}]"#;
        let dataset = parse_auto(json.as_bytes()).unwrap();
        assert!(matches!(dataset, Dataset::TokenList(tokens) if tokens.len() == 2));
    }

    #[test]
    fn detects_wrapped_token_list() {
        let json = r#"{"tokens": [{"name": "Primary"}]}"#;
        let dataset = parse_auto(json.as_bytes()).unwrap();
        assert!(matches!(dataset, Dataset::TokenList(tokens) if tokens.len() == 1));
    }

    #[test]
    fn empty_object_is_empty_theme_dataset() {
        let dataset = parse_auto(b"{}").unwrap();
        assert_eq!(dataset, Dataset::Themes(ThemeDataset::new()));
    }

    #[test]
    fn unknown_shapes() {
        assert!(matches!(
            parse_auto(br#"{"foo": {"bar": 1}}"#),
            Err(ParseError::UnknownFormat)
        ));
        assert!(matches!(parse_auto(b"42"), Err(ParseError::UnknownFormat)));
        assert!(matches!(parse_auto(b"not json"), Err(ParseError::Json(_))));
    }
}
