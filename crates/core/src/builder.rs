use tokenmap_protocol::{ColorEntry, RawToken, ThemeDataset};

use crate::index::TokenIndex;
use crate::naming::resolve_name;
use crate::parsers::Dataset;
use crate::style::classify;

/// Counters from one build pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct BuildReport {
    /// Theme partitions (or token lists) whose theme was recognized.
    pub partitions: usize,
    pub inserted: usize,
    /// Entries already present with the same theme and hex.
    pub duplicates: usize,
    /// Tokens outside the recognized color collections.
    pub skipped_style: usize,
    /// Tokens whose canonical name could not be derived.
    pub skipped_name: usize,
    /// Tokens without a color value.
    pub skipped_value: usize,
}

/// Index every recognized color token of a multi-theme dataset.
///
/// Only partitions whose trimmed display name is the dark or light theme id
/// are read. Entries accumulate on top of whatever `index` already holds;
/// identical entries are dropped, so rebuilding from the same dataset is
/// idempotent. Call [`TokenIndex::reset`] first for a clean rebuild.
pub fn build_themes(index: &mut TokenIndex, themes: &ThemeDataset, brand: &str) -> BuildReport {
    let mut report = BuildReport::default();

    for (key, theme) in themes {
        let theme_id = theme.name.trim();
        if !index.config().is_primary_theme(theme_id) {
            tracing::debug!(key, name = theme.name.as_str(), "skipping unrecognized theme");
            continue;
        }
        report.partitions += 1;
        let theme_id = theme_id.to_owned();
        for token in theme.overridden_tokens.values() {
            index_token(index, token, &theme_id, brand, &mut report);
        }
    }

    finish(index, report)
}

/// Index a flat token list, inferring its theme id from `source_path`.
///
/// The first configured path marker found in `source_path` becomes the
/// theme id of every entry. A path without any marker indexes nothing.
pub fn build_token_list(
    index: &mut TokenIndex,
    source_path: &str,
    tokens: &[RawToken],
    brand: &str,
) -> BuildReport {
    let mut report = BuildReport::default();

    match index.config().theme_for_path(source_path).map(str::to_owned) {
        Some(theme_id) => {
            report.partitions += 1;
            for token in tokens {
                index_token(index, token, &theme_id, brand, &mut report);
            }
        }
        None => tracing::debug!(source_path, "no theme marker in source path"),
    }

    finish(index, report)
}

/// Index whichever dataset shape was parsed.
pub fn build_dataset(
    index: &mut TokenIndex,
    dataset: &Dataset,
    source_path: &str,
    brand: &str,
) -> BuildReport {
    match dataset {
        Dataset::Themes(themes) => build_themes(index, themes, brand),
        Dataset::TokenList(tokens) => build_token_list(index, source_path, tokens, brand),
    }
}

fn index_token(
    index: &mut TokenIndex,
    token: &RawToken,
    theme_id: &str,
    brand: &str,
    report: &mut BuildReport,
) {
    let Some(style) = classify(token, index.config()) else {
        report.skipped_style += 1;
        return;
    };

    let name = match resolve_name(token, style, brand, index.config()) {
        Ok(name) => name,
        Err(err) => {
            tracing::warn!(token = ?token.id, %err, "skipping token");
            report.skipped_name += 1;
            return;
        }
    };

    let Some(value) = token.value.clone() else {
        tracing::debug!(name, "skipping token without a value");
        report.skipped_value += 1;
        return;
    };

    let entry = ColorEntry {
        theme_id: theme_id.to_owned(),
        value,
        style,
        name,
    };
    if index.insert(entry) {
        report.inserted += 1;
    } else {
        report.duplicates += 1;
    }
}

fn finish(index: &TokenIndex, report: BuildReport) -> BuildReport {
    tracing::info!(
        partitions = report.partitions,
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped_style + report.skipped_name + report.skipped_value,
        colors = index.len(),
        "token map built"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::tests::token_in_collection;
    use tokenmap_protocol::{ColorStyle, ColorValue, ThemeRecord, TokenOrigin};

    fn color(name: &str, collection: &str, hex: &str) -> RawToken {
        RawToken {
            value: Some(ColorValue::new(hex)),
            ..token_in_collection(name, collection)
        }
    }

    fn theme(name: &str, tokens: Vec<RawToken>) -> ThemeRecord {
        ThemeRecord {
            id: None,
            name: name.into(),
            overridden_tokens: tokens
                .into_iter()
                .enumerate()
                .map(|(i, t)| (format!("tok-{i}"), t))
                .collect(),
        }
    }

    fn dataset(themes: Vec<ThemeRecord>) -> ThemeDataset {
        themes
            .into_iter()
            .enumerate()
            .map(|(i, t)| (format!("theme-{i}"), t))
            .collect()
    }

    #[test]
    fn builds_dark_and_light_partitions() {
        let themes = dataset(vec![
            theme("Dark", vec![color("Primary", "Color Styles", "#000000")]),
            theme(" Light\n", vec![color("Primary", "Color Styles", "#FFFFFF")]),
            theme("High Contrast", vec![color("Primary", "Color Styles", "#FF0000")]),
        ]);
        let mut index = TokenIndex::new();
        let report = build_themes(&mut index, &themes, "");

        assert_eq!(report.partitions, 2);
        assert_eq!(report.inserted, 2);
        let entries = index.entries("Primary").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].theme_id, "Light");
        assert!(index.is_themed("Primary"));
        assert!(index.unthemed().is_empty());
    }

    #[test]
    fn unstyled_and_incomplete_tokens_are_skipped() {
        let mut no_value = color("NoValue", "Color Styles", "#000000");
        no_value.value = None;
        let mut no_name = color("", "Color Styles", "#000000");
        no_name.name = None;

        let themes = dataset(vec![theme(
            "Dark",
            vec![
                color("Heading", "Typography", "#000000"),
                RawToken::default(),
                no_value,
                no_name,
                color("Primary", "Color Styles", "#000000"),
            ],
        )]);
        let mut index = TokenIndex::new();
        let report = build_themes(&mut index, &themes, "");

        assert_eq!(report.skipped_style, 2);
        assert_eq!(report.skipped_value, 1);
        assert_eq!(report.skipped_name, 1);
        assert_eq!(report.inserted, 1);
        let keys: Vec<&str> = index.color_map().keys().map(String::as_str).collect();
        assert_eq!(keys, ["Primary"]);
    }

    #[test]
    fn brand_tokens_get_brand_names() {
        let mut gradient = color("Gradient start", "Brand Color Styles", "#123456");
        gradient.origin = Some(TokenOrigin {
            id: None,
            name: Some("Brand/GradientBase".into()),
        });
        let themes = dataset(vec![theme("Dark", vec![gradient])]);
        let mut index = TokenIndex::new();
        build_themes(&mut index, &themes, "Acme");

        let entry = index.resolve("BrandAcmeGB", "Dark").unwrap();
        assert_eq!(entry.style, ColorStyle::BrandColorStyles);
        assert_eq!(entry.hex(), "#123456");
    }

    #[test]
    fn rebuild_is_idempotent() {
        let themes = dataset(vec![
            theme("Dark", vec![color("Primary", "Color Styles", "#000000")]),
            theme("Light", vec![color("Primary", "Color Styles", "#FFFFFF")]),
        ]);
        let mut index = TokenIndex::new();
        build_themes(&mut index, &themes, "");
        let second = build_themes(&mut index, &themes, "");

        assert_eq!(second.inserted, 0);
        assert_eq!(second.duplicates, 2);
        assert_eq!(index.entries("Primary").unwrap().len(), 2);
    }

    #[test]
    fn builds_accumulate_until_reset() {
        let dark = dataset(vec![theme("Dark", vec![color("Primary", "Color Styles", "#000000")])]);
        let light = dataset(vec![theme("Light", vec![color("Primary", "Color Styles", "#FFFFFF")])]);
        let mut index = TokenIndex::new();
        build_themes(&mut index, &dark, "");
        assert!(!index.is_themed("Primary"));
        assert!(index.unthemed().contains_key("Primary"));

        build_themes(&mut index, &light, "");
        assert!(index.is_themed("Primary"));
        assert!(index.unthemed().is_empty());

        index.reset();
        build_themes(&mut index, &light, "");
        assert_eq!(index.entries("Primary").unwrap().len(), 1);
    }

    #[test]
    fn token_list_theme_from_path() {
        let tokens = vec![
            color("Accent", "Brand Color Styles", "#00FF00"),
            color("Surface", "Color Styles", "#EEEEEE"),
        ];
        let mut index = TokenIndex::new();
        let report = build_token_list(&mut index, "exports/Still/DarkUI.json", &tokens, "Still");

        assert_eq!(report.partitions, 1);
        assert_eq!(report.inserted, 2);
        let accent = index.resolve("StillAccent", "Light").unwrap();
        assert_eq!(accent.theme_id, "DarkUI");
        assert_eq!(index.name_for_hex("#EEEEEE"), Some("Surface"));
    }

    #[test]
    fn token_list_without_marker_indexes_nothing() {
        let tokens = vec![color("Surface", "Color Styles", "#EEEEEE")];
        let mut index = TokenIndex::new();
        let report = build_token_list(&mut index, "exports/colors.json", &tokens, "");
        assert_eq!(report, BuildReport::default());
        assert!(index.is_empty());
    }

    #[test]
    fn build_dataset_dispatches() {
        let tokens = Dataset::TokenList(vec![color("Surface", "Color Styles", "#EEEEEE")]);
        let mut index = TokenIndex::new();
        let report = build_dataset(&mut index, &tokens, "LightUI.json", "");
        assert_eq!(report.inserted, 1);
        assert_eq!(index.resolve("Surface", "LightUI").unwrap().theme_id, "LightUI");
    }
}
