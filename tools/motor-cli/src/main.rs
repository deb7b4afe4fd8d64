//! Motor CLI - terminal storefront for the MotorPro engine catalog.
//!
//! Commands:
//! - `motor catalog` - List listings and facet values
//! - `motor compare` - Print a side-by-side comparison table
//! - `motor replay` - Apply a JSON-lines event script to a fresh session
//! - `motor shop` - Interactive storefront session
//! - `motor config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, CompareArgs, ConfigArgs, ReplayArgs, ShopArgs};

/// Motor CLI - browse, compare and order engines from the terminal
#[derive(Parser)]
#[command(name = "motor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog listings, optionally filtered by facet
    Catalog(CatalogArgs),

    /// Compare two or three listings side by side
    Compare(CompareArgs),

    /// Replay a JSON-lines event script against a fresh session
    Replay(ReplayArgs),

    /// Start an interactive storefront session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&ctx.config.logging, cli.verbose) {
        ctx.output.warn(&format!("{:#}", e));
    }

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Compare(args) => commands::compare::run(args, &ctx),
        Commands::Replay(args) => commands::replay::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
