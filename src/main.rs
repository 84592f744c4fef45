use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wp_palette::models::PaletteConfig;
use wp_palette::services::{FileSink, PalettePipeline};

#[derive(Parser)]
#[command(name = "wp-palette")]
#[command(about = "WordPress editor color palette generator for Sass design tokens")]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "palette.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the palette and write the output document
    Build {
        /// Override the output file name
        #[arg(short, long)]
        output: Option<String>,

        /// Write a flat array instead of a theme.json settings block
        #[arg(long)]
        flat: bool,

        /// Pretty-print flat output
        #[arg(long)]
        pretty: bool,
    },
    /// Build the palette and print the document to stdout
    Print {
        /// Print a flat array instead of a theme.json settings block
        #[arg(long)]
        flat: bool,

        /// Pretty-print flat output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = PaletteConfig::load(&cli.config);

    match cli.command {
        Some(Commands::Build {
            output,
            flat,
            pretty,
        }) => {
            if let Some(output) = output {
                config.output = output;
            }
            apply_overrides(&mut config, flat, pretty);

            let pipeline = PalettePipeline::new(config);
            pipeline.run(&FileSink)?;
            Ok(())
        }
        Some(Commands::Print { flat, pretty }) => {
            apply_overrides(&mut config, flat, pretty);

            let pipeline = PalettePipeline::new(config);
            let contents = pipeline.render(Vec::new())?;
            println!("{contents}");
            Ok(())
        }
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

fn apply_overrides(config: &mut PaletteConfig, flat: bool, pretty: bool) {
    if flat {
        config.wp_theme_json = false;
    }
    if pretty {
        config.pretty = true;
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wp_palette=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Display the effective configuration and where its pieces resolve
fn run_status_command(config: &PaletteConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("wp-palette v{VERSION}");
    println!("Generates a WordPress editor color palette from Sass design tokens\n");

    println!("Configuration:");
    println!("  output        = {}", config.output_path().display());
    println!("  wp_theme_json = {}", config.wp_theme_json);
    println!("  pretty        = {}", config.pretty);
    println!("  blacklist     = {:?}", config.blacklist);

    println!("\nSass source:");
    println!("  path      = {}", config.sass.path.display());
    for file in &config.sass.files {
        let path = config.sass.path.join(file);
        let status = if path.exists() { "found" } else { "missing" };
        println!("  file      = {} ({status})", path.display());
    }
    println!("  variables = {:?}", config.sass.variables);

    println!("\nCommands:");
    println!("  wp-palette build    Build the palette and write the document");
    println!("  wp-palette print    Build the palette and print to stdout");
    println!("\nRun 'wp-palette --help' for more details.");
}
