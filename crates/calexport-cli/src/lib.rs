//! CLI: config loading, export command, disk delivery
//!
//! This crate provides the `calexport` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod disk;
pub mod error;

pub use cli::Cli;
pub use disk::DiskDelivery;
pub use error::{ExportError, ExportResult};
