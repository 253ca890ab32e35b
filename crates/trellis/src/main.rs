//! Trellis CLI - symbolic tree markup compiler.
//!
//! Provides commands for:
//! - `render`: Compile a tree literal to HTML or XML markup on stdout
//! - `preview`: Compile and display an indented, colorized preview

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PreviewArgs, RenderArgs};
use output::Output;

/// Trellis - symbolic tree markup compiler.
#[derive(Parser)]
#[command(name = "trellis", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a tree literal to markup.
    Render(RenderArgs),
    /// Compile and display an indented preview.
    Preview(PreviewArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Render(args) => args.verbose,
        Commands::Preview(args) => args.verbose,
    };

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN.
    // Diagnostics go to stderr; stdout carries the compiled document.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Preview(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
