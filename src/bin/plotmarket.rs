//! plotmarket - command-line interface for the garden-plot marketplace
//!
//! # Examples
//!
//! ```bash
//! # Post a listing
//! plotmarket post --title "Gärten in Pankow" --description "Zwei Parzellen" --image abc123
//!
//! # Search, umlaut spellings are interchangeable
//! plotmarket search "Gaerten" --page 1 --page-size 10
//!
//! # Close a listing
//! plotmarket set-status Ab3dE9xZ CLOSED
//! ```

use clap::Parser;
use plotmarket::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for --format json
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("plotmarket=info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    if let Err(e) = run(cli).await {
        plotmarket::cli::output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
