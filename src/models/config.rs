use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Which record field the exclusion list matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlacklistMatch {
    /// Exclude when either the color value or the slug matches
    #[default]
    Any,
    /// Exclude on the raw color value only
    Color,
    /// Exclude on the slug only
    Slug,
}

/// Tool configuration loaded from palette.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct PaletteConfig {
    /// File name of the written document
    #[serde(default = "default_output")]
    pub output: String,

    /// Prefix joined in front of `output` to form the destination path
    #[serde(default)]
    pub output_prepend: String,

    /// Write a nested theme.json settings block instead of a flat array
    #[serde(default = "default_wp_theme_json")]
    pub wp_theme_json: bool,

    /// Color values and slugs excluded before merging
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,

    /// Which record field the blacklist matches
    #[serde(default)]
    pub blacklist_match: BlacklistMatch,

    /// Pretty-print flat output (nested output is always pretty-printed)
    #[serde(default)]
    pub pretty: bool,

    /// Sass export source settings
    #[serde(default)]
    pub sass: SassConfig,
}

fn default_output() -> String {
    "theme.json".to_string()
}

fn default_wp_theme_json() -> bool {
    true
}

fn default_blacklist() -> Vec<String> {
    vec!["transparent".to_string(), "inherit".to_string()]
}

/// Where to find the compiled Sass-variable exports
#[derive(Debug, Deserialize, Clone)]
pub struct SassConfig {
    /// Directory containing the exported variable files
    #[serde(default = "default_sass_path")]
    pub path: PathBuf,

    /// Export JSON files to read, relative to `path`
    #[serde(default = "default_sass_files")]
    pub files: Vec<String>,

    /// Variable names to extract, with or without the leading `$`
    #[serde(default = "default_sass_variables")]
    pub variables: Vec<String>,
}

fn default_sass_path() -> PathBuf {
    PathBuf::from("resources/assets/styles/config")
}

fn default_sass_files() -> Vec<String> {
    vec!["variables.json".to_string()]
}

fn default_sass_variables() -> Vec<String> {
    vec!["colors".to_string()]
}

impl Default for SassConfig {
    fn default() -> Self {
        Self {
            path: default_sass_path(),
            files: default_sass_files(),
            variables: default_sass_variables(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            output_prepend: String::new(),
            wp_theme_json: default_wp_theme_json(),
            blacklist: default_blacklist(),
            blacklist_match: BlacklistMatch::default(),
            pretty: false,
            sass: SassConfig::default(),
        }
    }
}

impl PaletteConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file means "use the defaults"; a file that exists but does
    /// not parse is reported and also degrades to defaults. Unknown fields
    /// are ignored.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::debug!(path = %path.display(), %e, "No config file, using defaults");
                Self::default()
            }
        }
    }

    /// Destination path of the output document: `output_prepend + output`.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.output_prepend, self.output))
    }
}
