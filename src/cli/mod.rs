//! CLI adapter for plotmarket
//!
//! Provides a command-line interface over the listing store and the
//! search engine. Depends on `core/` only.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// plotmarket - garden-plot and produce classifieds
///
/// Post listings and search them by free text. Umlaut and digraph
/// spellings ("Gärten" / "Gaerten") find each other.
#[derive(Parser, Debug)]
#[command(name = "plotmarket")]
#[command(version)]
#[command(about = "Garden-plot classifieds search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search open listings
    Search(commands::SearchArgs),

    /// Post a new listing
    Post(commands::PostArgs),

    /// Show one listing with all its images
    Show(commands::ShowArgs),

    /// Open, close or hide a listing
    #[command(name = "set-status")]
    SetStatus(commands::StatusArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  plotmarket completions bash > ~/.local/share/bash-completion/completions/plotmarket
    ///   zsh:   plotmarket completions zsh > ~/.zfunc/_plotmarket
    ///   fish:  plotmarket completions fish > ~/.config/fish/completions/plotmarket.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Post(args) => commands::post::execute(args, &services, cli.format).await,
        Commands::Show(args) => commands::show::execute(args, &services, cli.format).await,
        Commands::SetStatus(args) => commands::status::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
