//! Repository Implementations
//!
//! In-memory implementations of the domain repository ports. Each repository
//! serializes access to its store through one `Mutex`.

mod authors;
mod catalog;
mod loans;
mod members;
mod store;

pub use authors::InMemoryAuthors;
pub use catalog::InMemoryCatalog;
pub use loans::InMemoryLoans;
pub use members::InMemoryMembers;
pub use store::KeyedStore;
