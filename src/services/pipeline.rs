//! One palette run: extract, build records, merge, render.

use crate::error::PaletteError;
use crate::models::{ColorRecord, PaletteConfig};
use crate::services::theme_writer::{ArtifactSink, OutputMode, ThemeWriter};
use crate::services::{palette_builder, sass_export};

/// Orchestrates a single synchronous invocation.
///
/// Each run is independent and idempotent given identical inputs; nothing is
/// cached across runs. Source-read failures degrade to an empty
/// contribution, so a run with directly-supplied colors still produces
/// output when the Sass source is missing.
pub struct PalettePipeline {
    config: PaletteConfig,
    writer: ThemeWriter,
}

impl PalettePipeline {
    pub fn new(config: PaletteConfig) -> Self {
        let mode = if config.wp_theme_json {
            OutputMode::ThemeJson
        } else {
            OutputMode::Flat
        };
        let writer = ThemeWriter::new(config.output_path(), mode, config.pretty);
        Self { config, writer }
    }

    /// Colors extracted from the configured Sass exports.
    ///
    /// Missing sources, unreadable files, and an empty allow-list all yield
    /// an empty collection, never an error.
    pub fn sass_colors(&self) -> Vec<ColorRecord> {
        let sass = &self.config.sass;
        if sass.files.is_empty() || sass.variables.is_empty() {
            return Vec::new();
        }

        let variables = sass_export::read_variables(&sass.path, &sass.files);
        let raw = sass_export::extract(&variables, &sass.variables);
        tracing::debug!(entries = raw.len(), "Extracted raw color entries");

        raw.into_iter()
            .map(|(slug, value)| ColorRecord::from_sass(&slug, &value))
            .collect()
    }

    /// Assemble the final ordered palette from the Sass source plus any
    /// directly-supplied collections.
    pub fn build_palette(&self, extra: Vec<Vec<ColorRecord>>) -> Vec<ColorRecord> {
        let mut collections = vec![self.sass_colors()];
        collections.extend(extra);

        let filtered: Vec<Vec<ColorRecord>> = collections
            .into_iter()
            .map(|collection| {
                palette_builder::apply_blacklist(
                    collection,
                    &self.config.blacklist,
                    self.config.blacklist_match,
                )
            })
            .collect();

        palette_builder::merge(filtered)
    }

    /// Run the full pipeline and return the rendered document text.
    pub fn render(&self, extra: Vec<Vec<ColorRecord>>) -> Result<String, PaletteError> {
        let palette = self.build_palette(extra);
        tracing::info!(colors = palette.len(), "Palette assembled");
        self.writer.render(&palette)
    }

    /// Run the pipeline and publish the document through `sink`.
    pub fn run(&self, sink: &dyn ArtifactSink) -> Result<(), PaletteError> {
        let contents = self.render(Vec::new())?;
        sink.publish(&self.config.output_path(), &contents)
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }
}
