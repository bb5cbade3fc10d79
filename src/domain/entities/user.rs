//! User entity

use serde::Serialize;

use crate::domain::value_objects::{MemberStatus, UserId, UserRole};
use crate::error::{LibraryError, LibraryResult};

/// A library user. The role never changes; status toggles between active and
/// blocked through `block` / `unblock`, each returning a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: UserRole,
    status: MemberStatus,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        status: MemberStatus,
    ) -> LibraryResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LibraryError::BlankField { field: "name" });
        }
        Ok(Self {
            id,
            name,
            email: email.into(),
            role,
            status,
        })
    }

    /// An active member
    pub fn member(id: UserId, name: impl Into<String>, email: impl Into<String>) -> LibraryResult<Self> {
        Self::new(id, name, email, UserRole::Member, MemberStatus::Active)
    }

    /// An active librarian
    pub fn librarian(id: UserId, name: impl Into<String>, email: impl Into<String>) -> LibraryResult<Self> {
        Self::new(id, name, email, UserRole::Librarian, MemberStatus::Active)
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn status(&self) -> MemberStatus {
        self.status
    }

    pub fn block(&self) -> Self {
        Self {
            status: MemberStatus::Blocked,
            ..self.clone()
        }
    }

    pub fn unblock(&self) -> Self {
        Self {
            status: MemberStatus::Active,
            ..self.clone()
        }
    }
}
