use thiserror::Error;
use tokenmap_protocol::ThemeDataset;

#[derive(Debug, Error)]
pub enum ThemesParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a theme export: opaque theme key -> `{ name, overriddenTokens }`.
pub fn parse_themes(data: &[u8]) -> Result<ThemeDataset, ThemesParseError> {
    Ok(serde_json::from_slice(data)?)
}
