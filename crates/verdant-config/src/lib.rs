//! Configuration for the Verdant biome generator.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, parse_cell};
pub use config::{CatalogConfig, Config, DebugConfig, GenerationConfig, GridConfig, default_dir};
pub use error::ConfigError;
