//! Reads compiled Sass-variable exports and extracts raw color entries.
//!
//! The export format is the JSON a Sass-to-JSON exporter produces: an array
//! of variables, where a map variable carries its entries under `mapValue`.

use std::path::Path;

use serde::Deserialize;

/// One exported Sass variable.
#[derive(Debug, Clone, Deserialize)]
pub struct SassVariable {
    /// Variable name as exported, including the leading `$`
    pub name: String,

    /// Raw source value
    #[serde(default)]
    pub value: Option<String>,

    /// Value after Sass compilation (functions applied, variables resolved)
    #[serde(default, rename = "compiledValue")]
    pub compiled_value: Option<String>,

    /// Entries of a Sass map value; absent for scalar variables
    #[serde(default, rename = "mapValue")]
    pub map_value: Option<Vec<SassMapEntry>>,
}

/// One entry of an exported Sass map.
#[derive(Debug, Clone, Deserialize)]
pub struct SassMapEntry {
    pub name: String,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default, rename = "compiledValue")]
    pub compiled_value: Option<String>,
}

impl SassMapEntry {
    /// Compiled value when the exporter provides one, raw value otherwise.
    fn resolved_value(&self) -> Option<&str> {
        self.compiled_value.as_deref().or(self.value.as_deref())
    }
}

/// Error reading a single export file.
///
/// The pipeline absorbs these and degrades to an empty contribution; they
/// never halt a run.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to read export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Normalize a configured variable name to the exported form: a configured
/// `colors` matches an exported `$colors`.
fn with_sigil(name: &str) -> String {
    if name.starts_with('$') {
        name.to_string()
    } else {
        format!("${name}")
    }
}

/// Extract raw `(slug, value)` color entries from exported variables.
///
/// Only variables whose name matches the allow-list and which carry a nested
/// map value contribute; scalar variables and map entries without a value
/// are skipped. An empty allow-list yields an empty result.
pub fn extract(variables: &[SassVariable], allowed: &[String]) -> Vec<(String, String)> {
    let allowed: Vec<String> = allowed.iter().map(|name| with_sigil(name)).collect();

    variables
        .iter()
        .filter(|variable| allowed.iter().any(|name| *name == variable.name))
        .filter_map(|variable| variable.map_value.as_ref())
        .flat_map(|entries| {
            entries.iter().filter_map(|entry| {
                let slug = entry.name.strip_prefix('$').unwrap_or(&entry.name);
                entry
                    .resolved_value()
                    .map(|value| (slug.to_string(), value.to_string()))
            })
        })
        .collect()
}

/// Read and parse one export file.
pub fn read_export_file(path: &Path) -> Result<Vec<SassVariable>, ExportError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read every configured export file from `dir`.
///
/// A missing or malformed file contributes nothing; callers treat an empty
/// result as "no palette available from this source".
pub fn read_variables(dir: &Path, files: &[String]) -> Vec<SassVariable> {
    let mut variables = Vec::new();
    for file in files {
        let path = dir.join(file);
        match read_export_file(&path) {
            Ok(mut parsed) => {
                tracing::debug!(
                    file = %path.display(),
                    variables = parsed.len(),
                    "Read Sass export"
                );
                variables.append(&mut parsed);
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), %e, "Skipping unreadable Sass export");
            }
        }
    }
    variables
}
