//! Syrup CLI - toolchain front-end for the Syrup circuit language.
//!
//! Provides commands for:
//! - `run`: Compile a `.syrup` file and render its output as an HTML preview
//! - `render`: Render already captured compiler output
//! - `check`: Report which toolchain programs are installed
//! - `install`: Build and install the Syrup compiler from source
//! - `complete`: List keyword completions for a prefix

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use commands::{CheckArgs, CompleteArgs, InstallArgs, RenderArgs, RunArgs};
use output::Output;

/// Syrup - circuit language toolchain front-end.
#[derive(Parser)]
#[command(name = "syrup", version, about)]
struct Cli {
    /// Enable verbose output (log external commands).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a Syrup file and write an HTML preview of its output.
    Run(RunArgs),
    /// Render captured compiler output without running the compiler.
    Render(RenderArgs),
    /// Check that the Syrup toolchain is installed.
    Check(CheckArgs),
    /// Download, build and install the Syrup compiler.
    Install(InstallArgs),
    /// List completion keywords matching a prefix.
    Complete(CompleteArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Install(args) => args.execute(),
        Commands::Complete(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
