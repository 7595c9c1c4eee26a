use serde::{Deserialize, Serialize};

/// An opaque color value, compared by its hex representation.
///
/// Accepts either a bare hex string or an object carrying a `hex` field on
/// the wire. Other channels (`r`, `g`, `b`, `opacity`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ColorValueRepr")]
pub struct ColorValue {
    hex: String,
}

impl ColorValue {
    pub fn new(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }

    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

impl From<&str> for ColorValue {
    fn from(hex: &str) -> Self {
        Self::new(hex)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorValueRepr {
    Hex(String),
    Object { hex: String },
}

impl From<ColorValueRepr> for ColorValue {
    fn from(repr: ColorValueRepr) -> Self {
        match repr {
            ColorValueRepr::Hex(hex) | ColorValueRepr::Object { hex } => Self { hex },
        }
    }
}

/// The recognized design-system collection a color token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorStyle {
    ColorStyles,
    /// Brand-scoped family; names get the brand substituted in.
    BrandColorStyles,
}

impl ColorStyle {
    pub fn is_brand(self) -> bool {
        matches!(self, Self::BrandColorStyles)
    }
}

impl std::fmt::Display for ColorStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColorStyles => write!(f, "Color Styles"),
            Self::BrandColorStyles => write!(f, "Brand Color Styles"),
        }
    }
}

/// One theme's value for a canonical color name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    /// Theme partition the value came from (`Dark`, `Light`, `LightUI`, ...).
    pub theme_id: String,
    pub value: ColorValue,
    pub style: ColorStyle,
    /// Canonical name, after origin and brand rules were applied.
    pub name: String,
}

impl ColorEntry {
    pub fn hex(&self) -> &str {
        self.value.hex()
    }
}
