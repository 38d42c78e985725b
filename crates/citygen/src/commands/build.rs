//! `citygen build` command implementation.

use std::path::PathBuf;

use citygen_builder::StaticSiteBuilder;
use citygen_config::{CliSettings, Config};
use clap::Args;

use super::build_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args, Default)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover citygen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Image copied into the site root (overrides config).
    #[arg(long)]
    image: Option<PathBuf>,

    /// Public origin used in sitemap.xml, e.g. https://example.com (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output (build phase logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the site cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            image_path: self.image,
            base_url: self.base_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!("Image: {}", config.paths.image_path.display()));

        let builder = StaticSiteBuilder::new(build_config(&config));
        let summary = builder.build(&config.paths.output_dir)?;

        output.success(&format!(
            "Generated {} pages into: {}",
            summary.manifest.len(),
            summary.output_dir.display()
        ));
        Ok(())
    }
}
