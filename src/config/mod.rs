//! Configuration module for Athenaeum
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ATHENAEUM_*)
//! 3. Explicit `--config` file, else `./athenaeum.toml`
//! 4. User config (`<config dir>/athenaeum/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use types::{Config, OutputConfig, OutputFormat, SeedConfig, Verbosity};
