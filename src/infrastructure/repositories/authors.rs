//! In-memory author repository

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::Author;
use crate::domain::ports::AuthorRepository;
use crate::domain::services::{classify, is_prolific};
use crate::domain::value_objects::{AuthorId, ProductivityLevel};

use super::store::KeyedStore;

#[derive(Debug, Default)]
pub struct InMemoryAuthors {
    inner: Mutex<KeyedStore<AuthorId, Author>>,
}

impl InMemoryAuthors {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, KeyedStore<AuthorId, Author>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn filtered(&self, keep: impl Fn(&Author) -> bool) -> Vec<Author> {
        self.lock()
            .values()
            .iter()
            .filter(|&author| keep(author))
            .cloned()
            .collect()
    }
}

impl AuthorRepository for InMemoryAuthors {
    fn save(&self, author: Author) -> Author {
        self.lock().upsert(author.id().clone(), author.clone());
        author
    }

    fn find_by_id(&self, id: &AuthorId) -> Option<Author> {
        self.lock().get(id).cloned()
    }

    fn find_all(&self) -> Vec<Author> {
        self.lock().values().to_vec()
    }

    fn delete_by_id(&self, id: &AuthorId) -> Option<Author> {
        self.lock().remove(id)
    }

    fn find_prolific(&self) -> Vec<Author> {
        self.filtered(|author| is_prolific(author.book_count()))
    }

    fn find_by_level(&self, level: ProductivityLevel) -> Vec<Author> {
        self.filtered(|author| classify(author.book_count()) == level)
    }

    fn find_by_full_name(&self, first_name: &str, last_name: &str) -> Option<Author> {
        self.lock()
            .values()
            .iter()
            .find(|author| {
                author.name().first_name() == first_name && author.name().last_name() == last_name
            })
            .cloned()
    }

    fn count_by_level(&self, level: ProductivityLevel) -> usize {
        self.lock()
            .values()
            .iter()
            .filter(|author| classify(author.book_count()) == level)
            .count()
    }

    fn find_top_by_book_count(&self, limit: usize) -> Vec<Author> {
        let mut authors = self.find_all();
        authors.sort_by(|a, b| b.book_count().cmp(&a.book_count()));
        authors.truncate(limit);
        authors
    }
}
