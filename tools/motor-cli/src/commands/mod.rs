//! CLI command implementations.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod replay;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Brand to show ("all" for every brand).
    #[arg(short, long, default_value = "all")]
    pub brand: String,

    /// Displacement to show ("all" for every displacement).
    #[arg(short, long, default_value = "all")]
    pub displacement: String,
}

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Listing ids to compare (up to three are kept).
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<u32>,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// JSON-lines event file, or "-" for stdin.
    pub file: String,

    /// Keep going after a rejected event.
    #[arg(short, long)]
    pub keep_going: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Preselect a brand.
    #[arg(short, long)]
    pub brand: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate configuration and the catalog it points to.
    Validate,
}
