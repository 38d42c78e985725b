//! `citygen routes` command implementation.

use std::path::PathBuf;

use citygen_builder::StaticSiteBuilder;
use citygen_config::Config;
use clap::Args;

use super::build_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover citygen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RoutesArgs {
    /// Print every page path, one per line, without writing anything.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let manifest = StaticSiteBuilder::new(build_config(&config)).manifest();

        for path in manifest.paths() {
            output.result(path);
        }
        Ok(())
    }
}
