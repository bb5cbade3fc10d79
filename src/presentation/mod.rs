//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Renders results as text or NDJSON

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, LoginArgs};
pub use factory::create_library_service;
pub use output::Renderer;
