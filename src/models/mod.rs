pub mod config;
pub mod record;

pub use config::{BlacklistMatch, PaletteConfig, SassConfig};
pub use record::ColorRecord;
