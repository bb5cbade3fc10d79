//! Typed identifiers
//!
//! Each entity gets its own newtype so a `CopyId` can never be passed where a
//! `BookId` is expected. Identifiers are validated non-blank on construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, LibraryResult};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier, rejecting blank input
            pub fn new(value: impl Into<String>) -> LibraryResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(LibraryError::BlankField { field: $field });
                }
                Ok(Self(value))
            }

            /// Generate a fresh random identifier
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = LibraryError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = LibraryError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a catalog title (not a physical copy)
    BookId,
    "book id"
);
string_id!(
    /// Identifier of one physical copy of a book
    CopyId,
    "copy id"
);
string_id!(
    /// Identifier of a member or librarian
    UserId,
    "user id"
);
string_id!(
    /// Identifier of a loan record
    LoanId,
    "loan id"
);
string_id!(
    /// Identifier of an author entity
    AuthorId,
    "author id"
);
string_id!(
    /// Identifier of a ledger transaction
    TransactionId,
    "transaction id"
);
