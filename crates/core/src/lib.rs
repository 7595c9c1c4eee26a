//! Theme-resolution index for design-token colors.
//!
//! ```text
//! dataset JSON ──▶ parsers ──▶ builder ──▶ TokenIndex ──▶ resolve / is_themed / name_for_hex
//!                               │   │
//!                          style::classify
//!                          naming::resolve_name
//! ```

pub mod builder;
pub mod config;
pub mod format;
pub mod index;
pub mod naming;
pub mod parsers;
pub mod style;

pub use builder::{BuildReport, build_dataset, build_themes, build_token_list};
pub use config::{ConfigError, IndexConfig};
pub use index::{ColorMap, TokenIndex};
pub use naming::{NameError, resolve_name};
pub use parsers::{Dataset, ParseError, parse_auto};
pub use style::{classify, is_color_allowed};
