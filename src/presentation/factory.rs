//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::LibraryService;
use crate::error::LibraryResult;
use crate::infrastructure::{LibrarySeed, SystemClock};

/// Load `seed_path` into fresh in-memory stores behind a wall clock
pub fn create_library_service(seed_path: &Path) -> LibraryResult<LibraryService> {
    let seed = LibrarySeed::load(seed_path)?;
    Ok(LibraryService::from_seed(seed, Arc::new(SystemClock)))
}
