//! # scout-cli
//!
//! Command line surface over the scout engine: argument parsing, config
//! loading, and one handler per subcommand.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands};
pub use config::AppConfig;
