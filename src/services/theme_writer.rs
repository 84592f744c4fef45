//! Shapes the final palette into the persisted document and publishes it.

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use crate::error::PaletteError;
use crate::models::ColorRecord;

/// Output document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Flat JSON array of palette entries
    Flat,
    /// WordPress theme.json settings block, merged into any existing document
    ThemeJson,
}

/// Decides how a rendered document is published.
///
/// The pipeline produces the text; the sink owns the side effect. A build
/// integration supplies its own sink instead of the core probing for host
/// capabilities.
pub trait ArtifactSink {
    fn publish(&self, path: &Path, contents: &str) -> Result<(), PaletteError>;
}

/// Writes the document to the local filesystem.
pub struct FileSink;

impl ArtifactSink for FileSink {
    fn publish(&self, path: &Path, contents: &str) -> Result<(), PaletteError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, contents)?;
        tracing::info!(
            path = %path.display(),
            bytes = contents.len(),
            "Wrote palette document"
        );
        Ok(())
    }
}

/// Renders the palette document. Content is fully computed in memory before
/// any write happens.
pub struct ThemeWriter {
    output_path: PathBuf,
    mode: OutputMode,
    pretty: bool,
}

impl ThemeWriter {
    pub fn new(output_path: PathBuf, mode: OutputMode, pretty: bool) -> Self {
        Self {
            output_path,
            mode,
            pretty,
        }
    }

    /// Produce the document text for this palette.
    ///
    /// Nested mode reads any pre-existing document at the output path and
    /// merges into it; a malformed existing document is fatal.
    pub fn render(&self, palette: &[ColorRecord]) -> Result<String, PaletteError> {
        match self.mode {
            OutputMode::Flat => {
                if self.pretty {
                    serde_json::to_string_pretty(palette).map_err(PaletteError::Serialize)
                } else {
                    serde_json::to_string(palette).map_err(PaletteError::Serialize)
                }
            }
            OutputMode::ThemeJson => {
                let existing = load_existing(&self.output_path)?;
                let merged = merge_into_document(existing, palette, &self.output_path)?;
                // theme.json consumers expect a diffable file; the pretty
                // flag only applies to flat mode
                serde_json::to_string_pretty(&merged).map_err(PaletteError::Serialize)
            }
        }
    }
}

/// Default document shell for a fresh theme.json.
pub fn default_document() -> Value {
    json!({
        "$schema": "https://schemas.wp.org/trunk/theme.json",
        "version": 2,
        "settings": {
            "color": {},
        },
    })
}

/// Load the pre-existing document at `path`, if any.
///
/// A missing file yields the default shell. A file that exists but is not
/// valid JSON is fatal: blindly overwriting it would destroy unrelated
/// theme settings.
pub fn load_existing(path: &Path) -> Result<Value, PaletteError> {
    if !path.exists() {
        return Ok(default_document());
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| PaletteError::MalformedDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `settings.color.palette`, preserving every other field.
///
/// Missing `settings` / `settings.color` containers are created as empty
/// objects first; non-object values in those slots are replaced.
pub fn merge_into_document(
    document: Value,
    palette: &[ColorRecord],
    path: &Path,
) -> Result<Value, PaletteError> {
    let Value::Object(mut root) = document else {
        return Err(PaletteError::DocumentNotObject {
            path: path.to_path_buf(),
        });
    };

    let palette_value = serde_json::to_value(palette).map_err(PaletteError::Serialize)?;

    let settings = ensure_object(&mut root, "settings");
    let color = ensure_object(settings, "color");
    color.insert("palette".to_string(), palette_value);

    Ok(Value::Object(root))
}

fn ensure_object<'a>(parent: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    if !matches!(parent.get(key), Some(Value::Object(_))) {
        parent.insert(key.to_string(), Value::Object(Map::new()));
    }
    match parent.get_mut(key) {
        Some(Value::Object(map)) => map,
        _ => unreachable!("slot was just set to an object"),
    }
}
