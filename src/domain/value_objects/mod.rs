//! Domain Value Objects
//!
//! Immutable value types compared by value, not identity.

mod author_name;
mod book_count;
mod config_warning;
mod copy_status;
mod credentials;
mod ids;
mod money;
mod productivity;
mod role;

pub use author_name::AuthorName;
pub use book_count::BookCount;
pub use config_warning::ConfigWarning;
pub use copy_status::CopyStatus;
pub use credentials::{Credentials, PasswordDigest};
pub use ids::{AuthorId, BookId, CopyId, LoanId, TransactionId, UserId};
pub use money::Money;
pub use productivity::ProductivityLevel;
pub use role::{MemberStatus, UserRole};
