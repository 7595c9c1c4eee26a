use thiserror::Error;
use tokenmap_protocol::{ColorStyle, RawToken};

use crate::config::IndexConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("token has no declared name")]
    MissingName,
    #[error("origin name {0:?} is empty once path separators are stripped")]
    EmptyOrigin(String),
}

/// Derive the canonical index name of a classified token.
///
/// Plain color styles keep their declared name. Brand color styles take
/// their base name from the origin (path separators removed) when one is
/// present, falling back to the declared name, and then get `brand` worked
/// in: the first `GradientBase` marker becomes `<brand>GB`, otherwise the
/// brand is prefixed.
pub fn resolve_name(
    token: &RawToken,
    style: ColorStyle,
    brand: &str,
    config: &IndexConfig,
) -> Result<String, NameError> {
    if !style.is_brand() {
        return declared_name(token).map(str::to_owned);
    }

    let base = match token.origin_name() {
        Some(origin) => {
            let stripped: String = origin.chars().filter(|&c| c != '/').collect();
            if stripped.is_empty() {
                return Err(NameError::EmptyOrigin(origin.to_owned()));
            }
            stripped
        }
        None => declared_name(token)?.to_owned(),
    };

    Ok(substitute_brand(&base, brand, config))
}

fn declared_name(token: &RawToken) -> Result<&str, NameError> {
    token
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(NameError::MissingName)
}

fn substitute_brand(base: &str, brand: &str, config: &IndexConfig) -> String {
    let marker = config.gradient_marker.as_str();
    if !marker.is_empty() && base.contains(marker) {
        base.replacen(marker, &format!("{brand}{}", config.gradient_suffix), 1)
    } else {
        format!("{brand}{base}")
    }
}
