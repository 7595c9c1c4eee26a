use serde::Deserialize;
use thiserror::Error;
use tokenmap_protocol::RawToken;

#[derive(Debug, Error)]
pub enum TokenListParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat token list: either a bare array or `{ "tokens": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenListFile {
    Object { tokens: Vec<RawToken> },
    Array(Vec<RawToken>),
}

/// Parse a flat list of raw tokens.
pub fn parse_token_list(data: &[u8]) -> Result<Vec<RawToken>, TokenListParseError> {
    let file: TokenListFile = serde_json::from_slice(data)?;
    Ok(match file {
        TokenListFile::Object { tokens } | TokenListFile::Array(tokens) => tokens,
    })
}
