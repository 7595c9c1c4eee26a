pub mod color;
pub mod theme;
pub mod token;

pub use color::{ColorEntry, ColorStyle, ColorValue};
pub use theme::{ThemeDataset, ThemeRecord};
pub use token::{PropertyOption, RawToken, TokenGroup, TokenOrigin, TokenProperty};
