//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod post;
pub mod search;
pub mod show;
pub mod status;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use post::PostArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
pub use status::StatusArgs;
