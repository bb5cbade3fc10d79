//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod author_repository;
pub mod catalog_repository;
pub mod clock;
pub mod loan_repository;
pub mod member_repository;

pub use author_repository::AuthorRepository;
pub use catalog_repository::CatalogRepository;
pub use clock::Clock;
pub use loan_repository::LoanRepository;
pub use member_repository::MemberRepository;
