use indexmap::IndexMap;
use tokenmap_protocol::{ColorEntry, ColorValue};

use crate::config::IndexConfig;

/// Canonical name -> entries, in first-insertion order.
pub type ColorMap = IndexMap<String, Vec<ColorEntry>>;

/// Theme-resolution index over canonical color names.
///
/// Populated by the builder (see [`crate::builder`]) and queried by the
/// rendering side. Entry order per name is insertion order, and the first
/// entry is the fallback for themes that were never recorded. Inserting the
/// same `(theme_id, hex)` pair twice for one name is a no-op, so rebuilding
/// from the same dataset leaves the index unchanged.
///
/// The index is plain owned data with no interior locking; callers that
/// share it across threads must serialize a build against queries.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    config: IndexConfig,
    colors: ColorMap,
    /// Names without distinct dark/light values, in `colors` order. Kept in
    /// step with `colors` by every insert and by reset.
    unthemed: ColorMap,
}

impl TokenIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Drop every entry, returning the index to its initial empty state.
    pub fn reset(&mut self) {
        self.colors.clear();
        self.unthemed.clear();
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The raw index.
    pub fn color_map(&self) -> &ColorMap {
        &self.colors
    }

    /// Entries recorded for `name`, in insertion order.
    pub fn entries(&self, name: &str) -> Option<&[ColorEntry]> {
        self.colors.get(name).map(Vec::as_slice)
    }

    /// Append `entry` under its canonical name.
    ///
    /// Returns `false` when an entry with the same theme id and hex is
    /// already recorded for that name.
    pub fn insert(&mut self, entry: ColorEntry) -> bool {
        let name = entry.name.clone();
        let entries = self.colors.entry(name.clone()).or_default();
        let duplicate = entries
            .iter()
            .any(|e| e.theme_id == entry.theme_id && e.hex() == entry.hex());
        if duplicate {
            return false;
        }
        entries.push(entry);
        self.sync_unthemed(&name);
        true
    }

    /// Best entry for `name` under `theme_id`.
    ///
    /// The first entry recorded for that theme wins; if the theme was never
    /// recorded for `name`, the first entry inserted for `name` is returned.
    /// Unknown names yield `None`.
    pub fn resolve(&self, name: &str, theme_id: &str) -> Option<&ColorEntry> {
        let Some(entries) = self.colors.get(name) else {
            tracing::debug!(name, theme_id, "color not found in token map");
            return None;
        };
        entries
            .iter()
            .find(|e| e.theme_id == theme_id)
            .or_else(|| entries.first())
    }

    /// Whether `name` has differing hex values under the dark and light
    /// themes. Names without both, or unknown names, are not themed.
    ///
    /// Entries are scanned in order until both themes have been seen; a
    /// repeated theme before that point replaces the earlier value.
    pub fn is_themed(&self, name: &str) -> bool {
        match self.colors.get(name) {
            Some(entries) => is_themed_entries(entries, &self.config),
            None => {
                tracing::debug!(name, "color not found in token map");
                false
            }
        }
    }

    /// Every name that is not themed, with its full entry list.
    pub fn unthemed(&self) -> &ColorMap {
        &self.unthemed
    }

    /// Canonical name of the first unthemed entry whose hex equals `hex`.
    pub fn name_for_hex(&self, hex: &str) -> Option<&str> {
        let found = self
            .unthemed
            .iter()
            .find(|(_, entries)| entries.iter().any(|e| e.hex() == hex))
            .map(|(name, _)| name.as_str());
        if found.is_none() {
            tracing::debug!(hex, "no unthemed color matches value");
        }
        found
    }

    pub fn name_for_value(&self, value: &ColorValue) -> Option<&str> {
        self.name_for_hex(value.hex())
    }

    /// Re-evaluate `name` after its entries changed.
    fn sync_unthemed(&mut self, name: &str) {
        let Some(entries) = self.colors.get(name) else {
            return;
        };
        if is_themed_entries(entries, &self.config) {
            self.unthemed.shift_remove(name);
        } else if let Some(cached) = self.unthemed.get_mut(name) {
            cached.clone_from(entries);
        } else {
            let position = self
                .colors
                .keys()
                .take_while(|k| k.as_str() != name)
                .filter(|k| self.unthemed.contains_key(k.as_str()))
                .count();
            self.unthemed
                .shift_insert(position, name.to_owned(), entries.clone());
        }
    }
}

fn is_themed_entries(entries: &[ColorEntry], config: &IndexConfig) -> bool {
    let mut dark: Option<&str> = None;
    let mut light: Option<&str> = None;

    for entry in entries {
        if entry.theme_id == config.dark_theme {
            dark = Some(entry.hex());
        } else if entry.theme_id == config.light_theme {
            light = Some(entry.hex());
        }
        if dark.is_some() && light.is_some() {
            break;
        }
    }

    matches!((dark, light), (Some(d), Some(l)) if d != l)
}
