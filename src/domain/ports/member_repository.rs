//! MemberRepository port - users and their credentials

use crate::domain::entities::User;
use crate::domain::value_objects::{Credentials, UserId};

pub trait MemberRepository: Send + Sync {
    fn users(&self) -> Vec<User>;

    fn find_by_id(&self, id: &UserId) -> Option<User>;

    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Insert or replace a user by id
    fn save(&self, user: User);

    fn remove(&self, id: &UserId) -> Option<User>;

    fn credentials(&self) -> Vec<Credentials>;

    /// Insert or replace credentials by email
    fn save_credentials(&self, credentials: Credentials);
}
