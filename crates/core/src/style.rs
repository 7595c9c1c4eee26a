use tokenmap_protocol::{ColorStyle, RawToken};

use crate::config::IndexConfig;

/// Property code name that carries a token's collection.
pub const COLLECTION_PROPERTY: &str = "collection";

/// Determine which recognized color collection `token` belongs to.
///
/// The collection id stored in the token's property values is opaque; only
/// the declared `collection` property's option list maps it to a name.
/// Returns `None` for tokens missing any part of that chain, or whose
/// collection is not one of the two recognized ones.
pub fn classify(token: &RawToken, config: &IndexConfig) -> Option<ColorStyle> {
    let collection_id = token
        .property_value(COLLECTION_PROPERTY)
        .filter(|id| !id.is_empty())?;
    let option = token.property(COLLECTION_PROPERTY)?.option(collection_id)?;

    if option.name == config.color_collection {
        Some(ColorStyle::ColorStyles)
    } else if option.name == config.brand_collection {
        Some(ColorStyle::BrandColorStyles)
    } else {
        None
    }
}

/// Whether a color name may be processed further (not a reserved name).
pub fn is_color_allowed(name: &str, config: &IndexConfig) -> bool {
    !config.reserved_colors.iter().any(|reserved| reserved == name)
}
