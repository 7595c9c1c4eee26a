use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::token::RawToken;

/// Opaque theme key -> theme record, in document order.
pub type ThemeDataset = IndexMap<String, ThemeRecord>;

/// A named theme partition and the tokens it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    #[serde(default)]
    pub id: Option<String>,
    /// Display name; may carry stray whitespace (`" Dark "`).
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overridden_tokens: IndexMap<String, RawToken>,
}
