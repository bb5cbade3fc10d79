//! Membership service: authentication and role predicates

use crate::domain::entities::User;
use crate::domain::value_objects::{Credentials, MemberStatus, UserRole};

/// Find credentials matching `email` and `password` exactly, then the user
/// with that email.
///
/// Both "no matching credentials" and "credentials without a user" yield
/// `None`.
pub fn authenticate(
    users: &[User],
    credentials: &[Credentials],
    email: &str,
    password: &str,
) -> Option<User> {
    credentials
        .iter()
        .find(|cred| cred.verify(email, password))
        .and_then(|_| users.iter().find(|user| user.email() == email))
        .cloned()
}

pub fn is_librarian(user: &User) -> bool {
    user.role() == UserRole::Librarian
}

pub fn is_active_member(user: &User) -> bool {
    user.role() == UserRole::Member && user.status() == MemberStatus::Active
}

/// Only active members may borrow; librarians and blocked members may not
pub fn can_borrow(user: &User) -> bool {
    is_active_member(user)
}
