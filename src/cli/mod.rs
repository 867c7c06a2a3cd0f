//! CLI module
//!
//! A thin command-line consumer of [`crate::AshbyClient`]. Every command
//! maps to one resource call or composition and prints JSON.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
