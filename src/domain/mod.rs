//! Domain Layer
//!
//! Pure business logic for the library, author and ledger models.
//!
//! ## Structure
//!
//! - `entities/` - Snapshots with identity (Book, BookCopy, User, Loan, Author)
//! - `value_objects/` - Immutable value types (ids, Credentials, BookCount, Money)
//! - `services/` - Pure operations (search, membership, lending, classification)
//! - `ports/` - Repository and clock traits implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or the clock directly
//! 2. **Immutable snapshots** - Changes produce new values that replace old ones by id
//! 3. **Ports & Adapters** - Storage goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
