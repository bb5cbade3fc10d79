//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Holds repositories as `Arc<dyn Port>` so any store can be plugged in
//!
//! ## Use Cases
//!
//! - `LibraryService` - login, search, borrow, return, block/unblock, loan reports
//! - `AuthorService` - author bookkeeping, classification and statistics

pub mod author;
pub mod library;

pub use author::{AuthorClassification, AuthorService, ProductivityStatistics};
pub use library::LibraryService;
