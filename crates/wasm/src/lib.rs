use std::sync::{LazyLock, Mutex};

use tokenmap_core::format::{documentation_comment, to_pretty_json, today_iso};
use tokenmap_core::parsers::{themes::parse_themes, token_list::parse_token_list};
use tokenmap_core::{TokenIndex, build_themes, build_token_list, classify, is_color_allowed};
use tokenmap_protocol::{RawToken, TokenGroup};
use wasm_bindgen::prelude::*;

/// The token map shared by every exported function for the life of the module.
static INDEX: LazyLock<Mutex<TokenIndex>> = LazyLock::new(|| Mutex::new(TokenIndex::new()));

fn with_index<T>(f: impl FnOnce(&mut TokenIndex) -> T) -> Result<T, JsError> {
    let mut index = INDEX
        .lock()
        .map_err(|_| JsError::new("token map lock poisoned"))?;
    Ok(f(&mut index))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Index the Dark/Light partitions of a theme export. Returns the build
/// report as JSON.
#[wasm_bindgen(js_name = groupTokensByName)]
pub fn group_tokens_by_name(theme_data: &str, brand: &str) -> Result<String, JsError> {
    let themes = parse_themes(theme_data.as_bytes()).map_err(|e| JsError::new(&e.to_string()))?;
    let report = with_index(|index| build_themes(index, &themes, brand))?;
    to_json(&report)
}

/// Index a flat token list whose theme is inferred from `source_path`.
#[wasm_bindgen(js_name = groupTokenListByName)]
pub fn group_token_list_by_name(
    source_path: &str,
    tokens: &str,
    brand: &str,
) -> Result<String, JsError> {
    let tokens = parse_token_list(tokens.as_bytes()).map_err(|e| JsError::new(&e.to_string()))?;
    let report = with_index(|index| build_token_list(index, source_path, &tokens, brand))?;
    to_json(&report)
}

#[wasm_bindgen(js_name = resetColorMap)]
pub fn reset_color_map() -> Result<(), JsError> {
    with_index(TokenIndex::reset)
}

/// Entry for `name` under `theme_id` as JSON, or `undefined` if unknown.
#[wasm_bindgen(js_name = getColorsFor)]
pub fn get_colors_for(name: &str, theme_id: &str) -> Result<Option<String>, JsError> {
    with_index(|index| index.resolve(name, theme_id).map(to_json).transpose())?
}

#[wasm_bindgen(js_name = isColorThemed)]
pub fn is_color_themed(name: &str) -> Result<bool, JsError> {
    with_index(|index| index.is_themed(name))
}

#[wasm_bindgen(js_name = getNameForColor)]
pub fn get_name_for_color(hex: &str) -> Result<Option<String>, JsError> {
    with_index(|index| index.name_for_hex(hex).map(str::to_owned))
}

#[wasm_bindgen(js_name = getColorMap)]
pub fn get_color_map() -> Result<String, JsError> {
    with_index(|index| to_json(index.color_map()))?
}

#[wasm_bindgen(js_name = isColorStylesToken)]
pub fn is_color_styles_token(token: &str) -> Result<bool, JsError> {
    let token: RawToken = serde_json::from_str(token).map_err(|e| JsError::new(&e.to_string()))?;
    with_index(|index| classify(&token, index.config()).is_some())
}

#[wasm_bindgen(js_name = isColorAllowed)]
pub fn is_color_allowed_js(name: &str) -> Result<bool, JsError> {
    with_index(|index| is_color_allowed(name, index.config()))
}

#[wasm_bindgen(js_name = createDocumentationComment)]
pub fn create_documentation_comment(text: &str, indent: &str) -> String {
    documentation_comment(text, indent)
}

/// Re-indent a JSON document with two spaces.
#[wasm_bindgen(js_name = objectToPrettyJson)]
pub fn object_to_pretty_json(json: &str) -> Result<String, JsError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| JsError::new(&e.to_string()))?;
    to_pretty_json(&value).map_err(|e| JsError::new(&e.to_string()))
}

/// Token ids and child-group ids of a token group, as a JSON array.
#[wasm_bindgen(js_name = getTokenGroupIds)]
pub fn get_token_group_ids(group: &str) -> Result<String, JsError> {
    let group: TokenGroup = serde_json::from_str(group).map_err(|e| JsError::new(&e.to_string()))?;
    to_json(&group.all_ids())
}

#[wasm_bindgen(js_name = currentDate)]
pub fn current_date() -> String {
    today_iso()
}
