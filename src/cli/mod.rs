//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `seed` - Run the demo-data seed modules once

pub mod args;

pub use args::{Cli, Commands};
