//! cfdocs CLI - docs-site sidebar and corpus table.
//!
//! Provides commands for:
//! - `sidebar`: Render the navigation sidebar for a route
//! - `corpora`: Search, filter and sort the corpus catalog

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CorporaArgs, SidebarArgs};
use output::Output;

/// cfdocs - docs-site navigation and corpus table.
#[derive(Parser)]
#[command(name = "cfdocs", version, about)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the navigation sidebar for one or more routes.
    Sidebar(SidebarArgs),
    /// Query the corpus catalog.
    Corpora(CorporaArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sidebar(args) => args.execute(&output),
        Commands::Corpora(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
