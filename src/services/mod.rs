pub mod palette_builder;
pub mod pipeline;
pub mod sass_export;
pub mod theme_writer;

pub use pipeline::PalettePipeline;
pub use sass_export::{ExportError, SassMapEntry, SassVariable};
pub use theme_writer::{ArtifactSink, FileSink, OutputMode, ThemeWriter};
