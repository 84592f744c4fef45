//! Test fixtures and constants.

use std::path::Path;

use wp_palette::models::{ColorRecord, PaletteConfig};

/// A Sass export carrying a `$colors` map plus variables the extractor must
/// ignore: a scalar, and a map not on the allow-list.
pub const VARIABLES_EXPORT: &str = r##"[
    {
        "name": "$font-size-base",
        "value": "1rem",
        "compiledValue": "16px"
    },
    {
        "name": "$colors",
        "value": "(brand-primary: #bada55, gray: #808080, black: #000000, see-through: transparent, accent: #ff0000)",
        "mapValue": [
            { "name": "brand-primary", "value": "#bada55", "compiledValue": "#bada55" },
            { "name": "gray", "value": "#808080", "compiledValue": "#808080" },
            { "name": "black", "value": "#000000", "compiledValue": "#000000" },
            { "name": "see-through", "value": "transparent", "compiledValue": "transparent" },
            { "name": "accent", "value": "#ff0000", "compiledValue": "#ff0000" }
        ]
    },
    {
        "name": "$breakpoints",
        "mapValue": [
            { "name": "sm", "value": "576px", "compiledValue": "576px" }
        ]
    }
]"##;

/// Export file name the default-ish test config points at.
pub const EXPORT_FILE: &str = "variables.json";

pub fn record(name: &str, slug: &str, color: &str) -> ColorRecord {
    ColorRecord::new(name, slug, color)
}

/// Write the standard export fixture into `dir`.
pub fn write_export(dir: &Path) {
    std::fs::write(dir.join(EXPORT_FILE), VARIABLES_EXPORT).unwrap();
}

/// Config reading the Sass export from `dir` and writing `theme.json`
/// back into it.
pub fn config_for(dir: &Path) -> PaletteConfig {
    let mut config = PaletteConfig::default();
    config.sass.path = dir.to_path_buf();
    config.sass.files = vec![EXPORT_FILE.to_string()];
    config.sass.variables = vec!["colors".to_string()];
    config.output = "theme.json".to_string();
    config.output_prepend = format!("{}/", dir.display());
    config
}
