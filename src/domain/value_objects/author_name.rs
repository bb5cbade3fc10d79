//! Author name value object

use crate::error::{LibraryError, LibraryResult};

/// First and last name, both non-blank
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorName {
    first_name: String,
    last_name: String,
}

impl AuthorName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> LibraryResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty() {
            return Err(LibraryError::BlankField {
                field: "first name",
            });
        }
        if last_name.trim().is_empty() {
            return Err(LibraryError::BlankField { field: "last name" });
        }
        Ok(Self {
            first_name,
            last_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl std::fmt::Display for AuthorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
