//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `repositories/` - Mutex-guarded in-memory repositories over a keyed store
//! - `clock` - System and fixed clocks
//! - `seed` - TOML seed loader that builds the library repositories

pub mod clock;
pub mod repositories;
pub mod seed;

pub use clock::{FixedClock, SystemClock};
pub use repositories::{InMemoryAuthors, InMemoryCatalog, InMemoryLoans, InMemoryMembers};
pub use seed::{LibrarySeed, SeededRepositories};
