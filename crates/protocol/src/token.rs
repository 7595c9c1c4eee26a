use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

/// A token record as exported by the design-file extraction layer.
///
/// Every field is optional on the wire. Incomplete records are not rejected
/// here; style classification and name derivation decide whether a token
/// makes it into the index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawToken {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<ColorValue>,
    /// Id of the token group this token lives in.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Set when the token was imported from another design source.
    #[serde(default)]
    pub origin: Option<TokenOrigin>,
    /// Property code name -> selected option id.
    #[serde(default)]
    pub property_values: Option<HashMap<String, String>>,
    #[serde(default)]
    pub properties: Option<Vec<TokenProperty>>,
}

impl RawToken {
    /// Option id stored under the given property code name, if any.
    pub fn property_value(&self, code_name: &str) -> Option<&str> {
        self.property_values
            .as_ref()
            .and_then(|values| values.get(code_name))
            .map(String::as_str)
    }

    /// Declared property with the given code name, if any.
    pub fn property(&self, code_name: &str) -> Option<&TokenProperty> {
        self.properties
            .as_deref()
            .and_then(|props| props.iter().find(|p| p.code_name == code_name))
    }

    /// Origin name, when present and non-empty.
    pub fn origin_name(&self) -> Option<&str> {
        self.origin
            .as_ref()
            .and_then(|o| o.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOrigin {
    #[serde(default)]
    pub id: Option<String>,
    /// Slash-separated path of the source token, e.g. `Brand/Primary`.
    #[serde(default)]
    pub name: Option<String>,
}

/// A custom property declared on a token (e.g. its `collection`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProperty {
    #[serde(default)]
    pub code_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<PropertyOption>>,
}

impl TokenProperty {
    pub fn option(&self, id: &str) -> Option<&PropertyOption> {
        self.options
            .as_deref()
            .and_then(|opts| opts.iter().find(|o| o.id == id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOption {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A token group from the design file's folder tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGroup {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub token_ids: Vec<String>,
    #[serde(default)]
    pub children_ids: Vec<String>,
}

impl TokenGroup {
    /// Direct token ids followed by direct child-group ids.
    pub fn all_ids(&self) -> Vec<String> {
        self.token_ids
            .iter()
            .chain(&self.children_ids)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_JSON: &str = r##"{
        "id": "t1",
        "name": "Primary",
        "value": { "hex": "#000000" },
        "parentId": "g1",
        "origin": { "id": "o1", "name": "Brand/Primary" },
        "propertyValues": { "collection": "c1" },
        "properties": [
            {
                "codeName": "collection",
                "name": "Collection",
                "options": [
                    { "id": "c1", "name": "Color Styles" },
                    { "id": "c2", "name": "Brand Color Styles" }
                ]
            }
        ]
    }"##;

    #[test]
    fn deserialize_full_token() {
        let token: RawToken = serde_json::from_str(TOKEN_JSON).unwrap();
        assert_eq!(token.name.as_deref(), Some("Primary"));
        assert_eq!(token.value.as_ref().map(ColorValue::hex), Some("#000000"));
        assert_eq!(token.parent_id.as_deref(), Some("g1"));
        assert_eq!(token.origin_name(), Some("Brand/Primary"));
        assert_eq!(token.property_value("collection"), Some("c1"));

        let collection = token.property("collection").unwrap();
        assert_eq!(collection.option("c2").unwrap().name, "Brand Color Styles");
        assert!(collection.option("c3").is_none());
    }

    #[test]
    fn deserialize_empty_token() {
        let token: RawToken = serde_json::from_str("{}").unwrap();
        assert_eq!(token, RawToken::default());
        assert!(token.property("collection").is_none());
        assert!(token.property_value("collection").is_none());
    }

    #[test]
    fn empty_origin_name_is_ignored() {
        let token: RawToken =
            serde_json::from_str(r#"{"name": "A", "origin": {"name": ""}}"#).unwrap();
        assert_eq!(token.origin_name(), None);
    }

    #[test]
    fn group_ids_tokens_then_children() {
        let group: TokenGroup =
            serde_json::from_str(r#"{"tokenIds": ["a", "b"], "childrenIds": ["g"]}"#).unwrap();
        assert_eq!(group.all_ids(), vec!["a", "b", "g"]);

        let empty: TokenGroup = serde_json::from_str("{}").unwrap();
        assert!(empty.all_ids().is_empty());
    }
}
