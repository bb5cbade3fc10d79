//! Athenaeum - library lending desk and author productivity classifier
//!
//! A catalog of books and copies, a membership roll with credentials and
//! roles, and a loan ledger, orchestrated by [`LibraryService`]. Authors are
//! classified by book count through [`AuthorService`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthorService, LibraryService};
pub use config::Config;
pub use domain::services::{classify, is_prolific};
pub use error::{LibraryError, LibraryResult};
pub use infrastructure::LibrarySeed;
