//! Common test utilities for Athenaeum scenario and CLI tests.
//!
//! - `TestEnv`: isolated temp directory with a seed file, plus a CLI runner
//! - `library`: in-process service over a seed with a pinned clock
//! - Fixtures: reusable seed content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

use std::path::Path;
use std::sync::Arc;

use athenaeum::infrastructure::FixedClock;
use athenaeum::{LibraryService, LibrarySeed};

/// Parse `seed` and build a service whose clock starts at `fixtures::start()`
pub fn library(seed: &str) -> (LibraryService, Arc<FixedClock>) {
    let seed = LibrarySeed::parse(seed, Path::new("fixture.toml")).unwrap();
    let clock = Arc::new(FixedClock::new(start()));
    (LibraryService::from_seed(seed, clock.clone()), clock)
}
