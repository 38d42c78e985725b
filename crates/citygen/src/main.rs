//! citygen CLI - static SEO site generator.
//!
//! Provides commands for:
//! - `build`: Generate the site (default when no command is given)
//! - `routes`: List the page paths a build would produce

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, RoutesArgs};
use output::Output;

/// citygen - static SEO site generator.
#[derive(Parser)]
#[command(name = "citygen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site into the output directory.
    Build(BuildArgs),
    /// List the page paths a build would produce.
    Routes(RoutesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for build command
    let verbose = matches!(&cli.command, Some(Commands::Build(args)) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Some(Commands::Build(args)) => args.execute(),
        Some(Commands::Routes(args)) => args.execute(),
        None => BuildArgs::default().execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
