//! In-memory membership repository

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::User;
use crate::domain::ports::MemberRepository;
use crate::domain::value_objects::{Credentials, UserId};

use super::store::KeyedStore;

#[derive(Debug, Default)]
struct Membership {
    users: KeyedStore<UserId, User>,
    credentials: KeyedStore<String, Credentials>,
}

#[derive(Debug, Default)]
pub struct InMemoryMembers {
    inner: Mutex<Membership>,
}

impl InMemoryMembers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(users: Vec<User>, credentials: Vec<Credentials>) -> Self {
        let mut membership = Membership::default();
        for user in users {
            membership.users.upsert(user.id().clone(), user);
        }
        for cred in credentials {
            membership.credentials.upsert(cred.email().to_string(), cred);
        }
        Self {
            inner: Mutex::new(membership),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Membership> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemberRepository for InMemoryMembers {
    fn users(&self) -> Vec<User> {
        self.lock().users.values().to_vec()
    }

    fn find_by_id(&self, id: &UserId) -> Option<User> {
        self.lock().users.get(id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.lock()
            .users
            .values()
            .iter()
            .find(|user| user.email() == email)
            .cloned()
    }

    fn save(&self, user: User) {
        self.lock().users.upsert(user.id().clone(), user);
    }

    fn remove(&self, id: &UserId) -> Option<User> {
        self.lock().users.remove(id)
    }

    fn credentials(&self) -> Vec<Credentials> {
        self.lock().credentials.values().to_vec()
    }

    fn save_credentials(&self, credentials: Credentials) {
        self.lock()
            .credentials
            .upsert(credentials.email().to_string(), credentials);
    }
}
