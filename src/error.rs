use std::path::PathBuf;

use thiserror::Error;

/// Errors that halt a palette run.
///
/// Missing or unreadable Sass sources are not represented here; they degrade
/// to an empty contribution inside the pipeline. Only failures where
/// continuing would lose data stop the run.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The pre-existing output document exists but is not valid JSON.
    /// Overwriting it would destroy unrelated theme settings.
    #[error("Existing theme document {} is not valid JSON: {source}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The pre-existing output document parses but is not a JSON object.
    #[error("Existing theme document {} is not a JSON object", path.display())]
    DocumentNotObject { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(serde_json::Error),
}
